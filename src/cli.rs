//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "innkeeper", about = "hotel review extraction tool.")]
/// Holds every command that is callable by the `innkeeper` command.
pub enum Innkeeper {
    #[structopt(about = "Extract hotels and reviews from a city-partitioned source tree")]
    Extract(Extract),
    #[structopt(about = "Score the reviews of a processed folder")]
    Score(Score),
    #[structopt(about = "Stream the reviews of a processed folder in COPY text format on stdout")]
    Emit(Emit),
    #[structopt(about = "Summarize the content of a processed folder")]
    Check(Check),
}

#[derive(Debug, StructOpt)]
/// Extraction command and parameters.
///
/// ```sh
/// innkeeper-extract 0.1.0
/// Extract hotels and reviews from a city-partitioned source tree
///
/// USAGE:
///     innkeeper extract [OPTIONS] <src> <dst>
///
/// OPTIONS:
///     -s, --chunk_size <chunk-size>    number of reviews per chunk file [default: 500]
///
/// ARGS:
///     <src>    source tree (one folder per city)
///     <dst>    destination of the hotel table and review chunks
/// ```
pub struct Extract {
    #[structopt(parse(from_os_str), help = "source tree (one folder per city)")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "destination of the hotel table and review chunks"
    )]
    pub dst: PathBuf,
    #[structopt(
        help = "number of reviews per chunk file",
        long = "chunk_size",
        default_value = "500",
        short = "s"
    )]
    pub chunk_size: usize,
}

#[derive(Debug, StructOpt)]
pub struct Score {
    #[structopt(parse(from_os_str), help = "processed folder location")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Emit {
    #[structopt(parse(from_os_str), help = "processed folder location")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Check {
    #[structopt(parse(from_os_str), help = "processed folder location")]
    pub dst: PathBuf,
}

#[cfg(test)]
mod tests {
    use innkeeper::context::DEFAULT_CHUNK_SIZE;

    use super::*;

    #[test]
    fn default_chunk_size() {
        let opt = Innkeeper::from_iter(["innkeeper", "extract", "raw", "out"]);
        match opt {
            Innkeeper::Extract(e) => {
                assert_eq!(e.src, PathBuf::from("raw"));
                assert_eq!(e.dst, PathBuf::from("out"));
                assert_eq!(e.chunk_size, DEFAULT_CHUNK_SIZE);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn chunk_size() {
        let opt = Innkeeper::from_iter(["innkeeper", "extract", "raw", "out", "-s", "3"]);
        assert!(matches!(opt, Innkeeper::Extract(Extract { chunk_size: 3, .. })));

        let opt =
            Innkeeper::from_iter(["innkeeper", "extract", "--chunk_size", "7", "raw", "out"]);
        assert!(matches!(opt, Innkeeper::Extract(Extract { chunk_size: 7, .. })));
    }

    #[test]
    fn other_commands() {
        assert!(matches!(
            Innkeeper::from_iter(["innkeeper", "score", "out"]),
            Innkeeper::Score(_)
        ));
        assert!(matches!(
            Innkeeper::from_iter(["innkeeper", "emit", "out"]),
            Innkeeper::Emit(_)
        ));
        assert!(matches!(
            Innkeeper::from_iter(["innkeeper", "check", "out"]),
            Innkeeper::Check(_)
        ));
    }
}
