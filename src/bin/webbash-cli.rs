//! Line-oriented host: reads commands from stdin and prints their output.
//!
//! Normal output goes to stdout and errors to stderr. Command echoes are not
//! reprinted since the terminal already shows what was typed.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;
    use webbash::config::{ShellConfig, WELCOME_MESSAGE};
    use webbash::core::Session;
    use webbash::models::{OutputLine, OutputLineData, OutputSink};

    #[derive(Parser)]
    #[command(name = "webbash-cli", version)]
    #[command(about = "A simulated shell over an in-memory directory tree")]
    struct Args {
        /// TOML file overriding the user, host and seeded directories
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print neither the welcome line nor prompts
        #[arg(short, long)]
        quiet: bool,
    }

    /// Output sink writing to a pair of streams.
    ///
    /// The first write error is kept and reported by [`StdioSink::finish`];
    /// later writes are skipped.
    pub(crate) struct StdioSink<O, E> {
        out: O,
        err: E,
        error: Option<io::Error>,
    }

    impl<O: Write, E: Write> StdioSink<O, E> {
        pub(crate) fn new(out: O, err: E) -> Self {
            Self {
                out,
                err,
                error: None,
            }
        }

        fn record(&mut self, result: io::Result<()>) {
            if let Err(e) = result
                && self.error.is_none()
            {
                self.error = Some(e);
            }
        }

        fn write_out(&mut self, text: &str) {
            let result = write!(self.out, "{text}");
            self.record(result);
        }

        fn write_err(&mut self, text: &str) {
            let result = writeln!(self.err, "{text}");
            self.record(result);
        }

        pub(crate) fn finish(&mut self) -> io::Result<()> {
            if let Some(e) = self.error.take() {
                return Err(e);
            }
            self.out.flush()?;
            self.err.flush()
        }
    }

    impl<O: Write, E: Write> OutputSink for StdioSink<O, E> {
        fn append(&mut self, line: OutputLine) {
            match line.data {
                OutputLineData::Command { .. } => {}
                OutputLineData::System(text) => self.write_out(&format!("{text}\n")),
                OutputLineData::Error(text) => self.write_err(&text),
            }
        }

        fn clear(&mut self) {
            self.write_out("\x1b[2J\x1b[H");
        }
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

        let args = Args::parse();
        let config = match &args.config {
            Some(path) => ShellConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ShellConfig::default(),
        };
        log::info!("starting shell for {}@{}", config.user, config.host);

        let mut session = Session::new(&config);
        let mut sink = StdioSink::new(io::stdout(), io::stderr());
        if !args.quiet {
            sink.write_out(&format!("{WELCOME_MESSAGE}\n"));
        }

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            if !args.quiet {
                sink.write_out(&session.prompt());
            }
            sink.finish().context("failed to write output")?;

            line.clear();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .context("failed to read stdin")?;
            if read == 0 {
                break;
            }

            session.execute(&line, &mut sink);
        }

        if !args.quiet {
            sink.write_out("\n");
        }
        sink.finish().context("failed to write output")?;
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn run_lines(lines: &[&str]) -> (String, String) {
            let mut session = Session::default();
            let mut sink = StdioSink::new(Vec::new(), Vec::new());
            for line in lines {
                session.execute(line, &mut sink);
            }
            sink.finish().unwrap();
            (
                String::from_utf8(sink.out).unwrap(),
                String::from_utf8(sink.err).unwrap(),
            )
        }

        #[test]
        fn test_streams_split_by_kind() {
            let (out, err) = run_lines(&["pwd", "cd nowhere", "ls"]);
            assert_eq!(out, "/home/user\ndocuments  downloads  projects\n");
            assert_eq!(err, "cd: no such file or directory: nowhere\n");
        }

        #[test]
        fn test_clear_writes_escape() {
            let (out, _) = run_lines(&["clear"]);
            assert_eq!(out, "\x1b[2J\x1b[H");
        }

        #[test]
        fn test_args_parse() {
            let args = Args::parse_from(["webbash-cli", "--config", "shell.toml", "-q"]);
            assert_eq!(args.config, Some(PathBuf::from("shell.toml")));
            assert!(args.quiet);
        }
    }
}
