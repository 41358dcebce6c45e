use std::io::{self, BufWriter};

use structopt::StructOpt;

use innkeeper::context::RunContext;
use innkeeper::error::Error;
use innkeeper::pipelines::{Extraction, Pipeline};
use innkeeper::processing::{check, emit, score, KeywordScorer};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Innkeeper::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Innkeeper::Extract(e) => {
            let ctx = RunContext::new(e.src, e.dst, e.chunk_size)?;
            let summary = Extraction::new(ctx).run()?;
            info!(
                "{} hotels, {} reviews in {} chunks",
                summary.nb_hotels, summary.nb_reviews, summary.nb_chunks
            );
        }

        cli::Innkeeper::Score(s) => {
            let summary = score::score_chunks(&s.dst, &KeywordScorer)?;
            if let Some(mean) = summary.mean_overall {
                info!("mean overall score: {:.2}", mean);
            }
        }

        cli::Innkeeper::Emit(e) => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            emit::emit(&e.dst, &mut out)?;
        }

        cli::Innkeeper::Check(c) => {
            let report = check::check(&c.dst)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    };
    Ok(())
}
