use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lexigrid::builder::GridBuilder;
use lexigrid::{Dictionary, Dimension, Discovery, Grid, Solver};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Find every dictionary word that can be traced through adjacent cells of a letter grid.
///
/// The grid comes from `--cells`, from positional rows, or, failing both, from one row per line on stdin.
#[derive(Parser, Debug)]
#[command(name = "solver")]
struct Args {
    /// Word list, one word per line.
    #[arg(long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Side length of the grid.
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Row-major labels separated by commas, e.g. `c,a,t,s,o,qu,...`. Labels may be several letters long.
    #[arg(long, conflicts_with = "rows")]
    cells: Option<String>,

    /// One string per row, each character a label.
    rows: Vec<String>,

    /// Sort the word list on load instead of rejecting an unsorted one.
    #[arg(long)]
    sort: bool,

    /// List each word once, alphabetically, instead of once per path in discovery order.
    #[arg(long)]
    unique: bool,

    /// Print the cells behind each word.
    #[arg(long)]
    paths: bool,

    /// Print a JSON object instead of plain lines.
    #[arg(long)]
    json: bool,

    /// Explore starting cells in parallel.
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lexigrid=info,solver=info")))
        .init();

    let args = Args::parse();

    let file = File::open(&args.dictionary)
        .with_context(|| format!("could not open dictionary {}", args.dictionary.display()))?;
    let dictionary = load_dictionary(BufReader::new(file), args.sort)?;
    tracing::info!("Loaded {} words from {}", dictionary.len(), args.dictionary.display());

    let grid = read_grid(&args, std::io::stdin().lock())?;
    tracing::debug!("Solving\n{}", grid);

    let solver = Solver::new(&grid, &dictionary);
    let mut found = if args.parallel { solver.par_discoveries() } else { solver.discoveries() };
    if args.unique {
        found.sort_by(|a, b| a.word.cmp(&b.word));
        found.dedup_by(|a, b| a.word == b.word);
    }

    print!("{}", render(&found, &args));
    Ok(())
}

fn load_dictionary<R: BufRead>(reader: R, sort: bool) -> anyhow::Result<Dictionary> {
    let dictionary = if sort {
        Dictionary::from_reader_unsorted(reader)?
    } else {
        Dictionary::from_reader(reader).context("pass --sort to accept an unsorted word list")?
    };

    Ok(dictionary)
}

fn read_grid<R: BufRead>(args: &Args, input: R) -> anyhow::Result<Grid> {
    let dim = Dimension::new(args.size).context("--size must be at least 1")?;
    let builder = match (&args.cells, args.rows.is_empty()) {
        (Some(cells), _) => GridBuilder::parse_cells(dim, cells),
        (None, false) => GridBuilder::from_rows(dim, &args.rows[..]),
        (None, true) => {
            eprintln!("Enter the grid, {} rows of {} letters:", dim, dim);
            let lines = input.lines()
                .take(dim.get())
                .collect::<Result<Vec<_>, _>>()
                .context("could not read grid from stdin")?;
            let rows = lines.iter().map(|line| line.trim()).collect::<Vec<_>>();
            GridBuilder::from_rows(dim, &rows[..])
        }
    };

    Ok(builder.build()?)
}

fn render(found: &[Discovery], args: &Args) -> String {
    if args.json {
        let words = found.iter()
            .map(|discovery| match args.paths {
                true => json!({
                    "word": discovery.word,
                    "path": discovery.path.iter().map(|location| [location.0, location.1]).collect::<Vec<_>>(),
                }),
                false => json!(discovery.word),
            })
            .collect::<Vec<_>>();

        return format!("{}\n", json!({ "found": found.len(), "words": words }));
    }

    let mut out = format!("FOUND : {}\n", found.len());
    for discovery in found {
        out.push_str(&discovery.word);
        if args.paths {
            for location in &discovery.path {
                out.push_str(&format!(" {}", location));
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;
    use lexigrid::{Dictionary, Location, Solver};

    use crate::{load_dictionary, read_grid, render, Args};

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("solver").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let args = args(&[]);
        assert_eq!(args.size, 4);
        assert_eq!(args.dictionary.to_str(), Some("dictionary.txt"));
        assert!(!args.json && !args.unique && !args.paths && !args.sort && !args.parallel);
    }

    #[test]
    fn cells_and_rows_conflict() {
        assert!(Args::try_parse_from(["solver", "--cells", "a,b,c,d", "ab", "cd"]).is_err());
    }

    #[test]
    fn grid_from_each_source() {
        let from_cells = read_grid(&args(&["--size", "2", "--cells", "qu,i,t,e"]), Cursor::new("")).unwrap();
        assert_eq!(from_cells.label(Location(0, 0)), Ok("qu"));

        let from_rows = read_grid(&args(&["--size", "2", "ab", "cd"]), Cursor::new("")).unwrap();
        assert_eq!(format!("{}", from_rows), "ab\ncd\n");

        let from_stdin = read_grid(&args(&["--size", "2"]), Cursor::new("ab \ncd\nef\n")).unwrap();
        assert_eq!(from_stdin, from_rows);

        assert!(read_grid(&args(&["--size", "2", "--cells", "a,b,c"]), Cursor::new("")).is_err());
        assert!(read_grid(&args(&["--size", "2"]), Cursor::new("ab\n")).is_err());
        assert!(read_grid(&args(&["--size", "0", "--cells", ""]), Cursor::new("")).is_err());

        let three = read_grid(&args(&["--size", "3", "abc", "def", "ghi"]), Cursor::new("")).unwrap();
        assert_eq!(three.dim().get(), 3);
    }

    #[test]
    fn unsorted_dictionary_needs_flag() {
        assert!(load_dictionary(Cursor::new("dog\ncat\n"), false).is_err());
        assert_eq!(load_dictionary(Cursor::new("dog\ncat\n"), true).unwrap().words(), ["cat", "dog"]);
    }

    #[test]
    fn renders_plain_and_json() {
        let grid = read_grid(&args(&["--size", "2", "ab", "cd"]), Cursor::new("")).unwrap();
        let dictionary = Dictionary::new(vec!["a".into(), "ab".into()]).unwrap();
        let found = Solver::new(&grid, &dictionary).discoveries();

        assert_eq!(render(&found, &args(&[])), "FOUND : 2\nab\na\n");
        assert_eq!(render(&found, &args(&["--paths"])), "FOUND : 2\nab (0, 0) (0, 1)\na (0, 0)\n");
        assert_eq!(render(&found, &args(&["--json"])), "{\"found\":2,\"words\":[\"ab\",\"a\"]}\n");
        assert_eq!(
            render(&found, &args(&["--json", "--paths"])),
            "{\"found\":2,\"words\":[{\"path\":[[0,0],[0,1]],\"word\":\"ab\"},{\"path\":[[0,0]],\"word\":\"a\"}]}\n",
        );
    }
}
