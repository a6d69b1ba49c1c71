use clap::{Args, Parser, Subcommand, ValueEnum};
use dnamotif::{
    composition::{gc_content, maximum_skew_positions, minimum_skew_positions, skew},
    data::{
        err::{OrFail, SequenceError},
        input::{InputError, parse_sequence_text, read_sequence_file},
        nucleotides::{Nucleotides, back_transcribe},
    },
    distance::hamming,
    kmer::{find_clumps, frequent_words, frequent_words_with_mismatches, neighborhood},
    motif::enumerate_motifs,
    search::{OpenReadingFrame, approximate_match_positions, approximate_pattern_count, find_orfs},
};
use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

#[derive(Parser)]
#[command(name = "dnamotif", author, version, about, long_about = None)]
#[command(propagate_version = true)]
/// Mismatch-tolerant k-mer, motif, and pattern search over DNA sequences.
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SequenceArgs {
    /// DNA sequences given on the command line
    #[arg(value_name = "SEQ")]
    sequences: Vec<String>,

    /// Read the sequences from a flat text or FASTA file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "sequences")]
    file: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Extreme {
    Min,
    Max,
}

#[derive(Subcommand)]
enum Commands {
    /// Hamming distance between two sequences of equal length
    Hamming {
        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Every k-mer within d mismatches of a pattern
    Neighbors {
        /// The pattern to vary
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Maximum number of mismatches
        #[arg(short, default_value_t = 1, value_name = "D")]
        d: usize,
    },

    /// Reverse complement of each sequence
    #[command(visible_alias = "rc")]
    Revcomp {
        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Start positions of the windows within d mismatches of a pattern
    Approx {
        /// The pattern to search for
        #[arg(short, long, value_name = "PATTERN")]
        pattern: String,

        /// Maximum number of mismatches
        #[arg(short, default_value_t = 0, value_name = "D")]
        d: usize,

        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Number of windows within d mismatches of a pattern
    Count {
        /// The pattern to search for
        #[arg(short, long, value_name = "PATTERN")]
        pattern: String,

        /// Maximum number of mismatches
        #[arg(short, default_value_t = 0, value_name = "D")]
        d: usize,

        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Most frequent k-mers, optionally with mismatches and reverse complements
    Frequent {
        /// The k-mer length
        #[arg(short, value_name = "K")]
        k: usize,

        /// Maximum number of mismatches
        #[arg(short, default_value_t = 0, value_name = "D")]
        d: usize,

        /// Add the counts of each k-mer's reverse complement
        #[arg(short, long)]
        reverse_complement: bool,

        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Every (k, d)-motif shared by all of the sequences
    Motifs {
        /// The k-mer length
        #[arg(short, value_name = "K")]
        k: usize,

        /// Maximum number of mismatches
        #[arg(short, default_value_t = 0, value_name = "D")]
        d: usize,

        #[command(flatten)]
        input: SequenceArgs,
    },

    /// K-mers occurring at least t times within some window of length L
    Clumps {
        /// The k-mer length
        #[arg(short, value_name = "K")]
        k: usize,

        /// The window length
        #[arg(short = 'L', long = "window", value_name = "L")]
        window_length: usize,

        /// Minimum number of occurrences within a window
        #[arg(short, value_name = "T")]
        t: usize,

        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Running G - C skew, or the positions where it is extreme
    Skew {
        /// Print the positions of the minimum or maximum skew instead
        #[arg(long, value_enum, value_name = "EXTREME")]
        positions: Option<Extreme>,

        #[command(flatten)]
        input: SequenceArgs,
    },

    /// GC content of each sequence
    Gc {
        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Length of each sequence
    Length {
        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Template strand and mRNA of each coding strand
    Transcribe {
        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Coding DNA of each mRNA sequence
    BackTranscribe {
        /// RNA sequences over ACGU
        #[arg(value_name = "RNA", required = true)]
        rna: Vec<String>,
    },

    /// Protein of each coding strand under the standard genetic code
    Translate {
        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Open reading frames in the three forward frames
    Orfs {
        #[command(flatten)]
        input: SequenceArgs,
    },
}

enum Output {
    Sequences(Vec<Vec<u8>>),
    Numbers(Vec<usize>),
    Skew(Vec<i64>),
    Fractions(Vec<f64>),
    Orfs(Vec<OpenReadingFrame>),
}

impl SequenceArgs {
    fn load(&self) -> Result<Vec<Nucleotides>, InputError> {
        if let Some(path) = &self.file {
            return read_sequence_file(path);
        }

        let mut sequences = Vec::with_capacity(self.sequences.len());
        for arg in &self.sequences {
            sequences.extend(parse_sequence_text(arg.as_bytes())?);
        }
        Ok(sequences)
    }

    fn load_one(&self) -> Result<Nucleotides, SequenceError> {
        let mut sequences = self.load().unwrap_or_fail();
        match (sequences.pop(), sequences.is_empty()) {
            (Some(sequence), true) => Ok(sequence),
            _ => Err(SequenceError::InvalidInput("exactly one sequence is required")),
        }
    }
}

fn run(command: &Commands) -> Output {
    match command {
        Commands::Hamming { input } => {
            let sequences = input.load().unwrap_or_fail();
            let distance = match sequences.as_slice() {
                [x, y] => hamming(x.as_bytes(), y.as_bytes()),
                _ => Err(SequenceError::InvalidInput("exactly two sequences are required")),
            };
            Output::Numbers(vec![distance.unwrap_or_fail()])
        }
        Commands::Neighbors { pattern, d } => {
            let pattern = Nucleotides::from_dna(pattern.as_bytes()).unwrap_or_fail();
            Output::Sequences(neighborhood(pattern.as_bytes(), *d).unwrap_or_fail())
        }
        Commands::Revcomp { input } => Output::Sequences(
            input
                .load()
                .unwrap_or_fail()
                .into_iter()
                .map(|s| s.reverse_complement().into_vec())
                .collect(),
        ),
        Commands::Approx { pattern, d, input } => {
            let pattern = Nucleotides::from_dna(pattern.as_bytes()).unwrap_or_fail();
            let host = input.load_one().unwrap_or_fail();
            Output::Numbers(approximate_match_positions(pattern.as_bytes(), host.as_bytes(), *d).unwrap_or_fail())
        }
        Commands::Count { pattern, d, input } => {
            let pattern = Nucleotides::from_dna(pattern.as_bytes()).unwrap_or_fail();
            let host = input.load_one().unwrap_or_fail();
            Output::Numbers(vec![
                approximate_pattern_count(pattern.as_bytes(), host.as_bytes(), *d).unwrap_or_fail(),
            ])
        }
        Commands::Frequent {
            k,
            d,
            reverse_complement,
            input,
        } => {
            let host = input.load_one().unwrap_or_fail();
            let words = if *d == 0 && !*reverse_complement {
                frequent_words(host.as_bytes(), *k)
            } else {
                frequent_words_with_mismatches(host.as_bytes(), *k, *d, *reverse_complement)
            };
            Output::Sequences(words.unwrap_or_fail())
        }
        Commands::Motifs { k, d, input } => {
            let sequences = input.load().unwrap_or_fail();
            Output::Sequences(enumerate_motifs(sequences.as_slice(), *k, *d).unwrap_or_fail())
        }
        Commands::Clumps {
            k,
            window_length,
            t,
            input,
        } => {
            let genome = input.load_one().unwrap_or_fail();
            Output::Sequences(find_clumps(genome.as_bytes(), *k, *window_length, *t).unwrap_or_fail())
        }
        Commands::Skew { positions, input } => {
            let genome = input.load_one().unwrap_or_fail();
            match positions {
                None => Output::Skew(skew(genome.as_bytes())),
                Some(Extreme::Min) => Output::Numbers(minimum_skew_positions(genome.as_bytes())),
                Some(Extreme::Max) => Output::Numbers(maximum_skew_positions(genome.as_bytes())),
            }
        }
        Commands::Gc { input } => Output::Fractions(
            input
                .load()
                .unwrap_or_fail()
                .iter()
                .map(|s| gc_content(s.as_bytes()).unwrap_or_default())
                .collect(),
        ),
        Commands::Length { input } => {
            Output::Numbers(input.load().unwrap_or_fail().iter().map(Nucleotides::len).collect())
        }
        Commands::Transcribe { input } => Output::Sequences(
            input
                .load()
                .unwrap_or_fail()
                .iter()
                .flat_map(|s| [s.reverse_complement().into_vec(), s.transcribe()])
                .collect(),
        ),
        Commands::BackTranscribe { rna } => Output::Sequences(
            rna.iter()
                .map(|s| {
                    let bases: Vec<u8> = s
                        .bytes()
                        .filter(|b| !b.is_ascii_whitespace())
                        .map(|b| b.to_ascii_uppercase())
                        .collect();
                    back_transcribe(&bases).unwrap_or_fail()
                })
                .collect(),
        ),
        Commands::Translate { input } => {
            Output::Sequences(input.load().unwrap_or_fail().iter().map(Nucleotides::translate).collect())
        }
        Commands::Orfs { input } => {
            let genome = input.load_one().unwrap_or_fail();
            Output::Orfs(find_orfs(genome.as_bytes()).unwrap_or_fail())
        }
    }
}

fn write_integers<W: Write, I: itoa::Integer + Copy>(out: &mut W, values: &[I]) -> std::io::Result<()> {
    let mut buff = itoa::Buffer::new();
    for (i, &value) in values.iter().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        out.write_all(buff.format(value).as_bytes())?;
    }
    out.write_all(b"\n")
}

fn write_output<W: Write>(out: &mut W, output: &Output) -> std::io::Result<()> {
    match output {
        Output::Sequences(sequences) => {
            for sequence in sequences {
                out.write_all(sequence)?;
                out.write_all(b"\n")?;
            }
        }
        Output::Numbers(values) => write_integers(out, values)?,
        Output::Skew(values) => write_integers(out, values)?,
        Output::Fractions(values) => {
            for value in values {
                writeln!(out, "{value:.4}")?;
            }
        }
        Output::Orfs(orfs) => {
            let mut buff = itoa::Buffer::new();
            for orf in orfs {
                for value in [orf.frame, orf.start, orf.len()] {
                    out.write_all(buff.format(value).as_bytes())?;
                    out.write_all(b"\t")?;
                }
                out.write_all(&orf.sequence)?;
                out.write_all(b"\n")?;
            }
        }
    }
    out.flush()
}

fn main() {
    let cli = Cli::parse();
    let output = run(&cli.command);

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_output(&mut writer, &output).unwrap_or_die("Could not write the results");
}
