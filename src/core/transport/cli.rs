//! Interactive CLI transport.
//!
//! A read-eval-print loop over stdin/stdout: prompt for a tool name, prompt
//! for the text, print the result, repeat. `quit`, `exit`, `q`, end of input,
//! or Ctrl-C leave the loop.

use std::io::ErrorKind;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tracing::{debug, info, warn};

use super::TransportResult;
use crate::core::ToolServer;
use crate::domains::tools::{Arguments, InvocationRequest, InvocationResult};

const EXIT_COMMANDS: &[&str] = &["quit", "exit", "q"];

enum Input {
    Line(String),
    Unreadable(std::io::Error),
    End,
}

/// CLI transport handler.
pub struct CliTransport;

impl CliTransport {
    /// Run the interactive prompt on stdin/stdout.
    pub async fn run(server: ToolServer) -> TransportResult<()> {
        info!("Ready - interactive prompt on stdin/stdout");

        let mut session = CliSession::new(
            server,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        );

        session.banner().await?;
        tokio::select! {
            result = session.prompt_loop() => result?,
            _ = tokio::signal::ctrl_c() => debug!("Interrupted"),
        }
        session.goodbye().await?;

        info!("CLI transport finished");
        Ok(())
    }
}

/// One interactive session over a reader and a writer.
pub struct CliSession<R, W> {
    server: ToolServer,
    lines: Lines<R>,
    writer: W,
}

impl<R, W> CliSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(server: ToolServer, reader: R, writer: W) -> Self {
        Self {
            server,
            lines: reader.lines(),
            writer,
        }
    }

    /// Banner, prompt loop, and farewell.
    pub async fn run(&mut self) -> TransportResult<()> {
        self.banner().await?;
        self.prompt_loop().await?;
        self.goodbye().await
    }

    /// Consume the session and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    async fn banner(&mut self) -> TransportResult<()> {
        let mut banner = format!("{} - CLI Mode\nAvailable tools:\n", self.server.name());
        for tool in self.server.registry().list() {
            banner.push_str(&format!("  - {}: {}\n", tool.name, tool.description));
        }
        self.write(&banner).await
    }

    async fn prompt_loop(&mut self) -> TransportResult<()> {
        loop {
            self.write("\nEnter tool name (or 'quit' to exit):\n> ").await?;
            let line = match self.next_input().await? {
                Input::Line(line) => line,
                Input::Unreadable(e) => {
                    self.write(&format!("Error: {e}\n")).await?;
                    continue;
                }
                Input::End => break,
            };

            let tool_name = line.trim();
            if EXIT_COMMANDS.contains(&tool_name.to_lowercase().as_str()) {
                break;
            }

            let resolved = self.server.resolve(tool_name).map(|tool| tool.name);
            let tool_name = match resolved {
                Ok(name) => name,
                Err(_) => {
                    self.write(&format!("Tool '{tool_name}' not found\n")).await?;
                    continue;
                }
            };

            self.write("Enter text to analyze:\n> ").await?;
            let text = match self.next_input().await? {
                Input::Line(text) => text,
                Input::Unreadable(e) => {
                    self.write(&format!("Error: {e}\n")).await?;
                    continue;
                }
                Input::End => break,
            };

            let mut arguments = Arguments::new();
            arguments.insert("text".to_string(), text.into());

            let output = match self
                .server
                .call_tool(InvocationRequest::new(tool_name, arguments))
            {
                InvocationResult::Success { result, .. } => format!("Result: {result}\n"),
                InvocationResult::Failure { error } => format!("Error: {error}\n"),
            };
            self.write(&output).await?;
        }

        Ok(())
    }

    /// Read one line. A line that is not valid UTF-8 is consumed and
    /// reported instead of ending the session.
    async fn next_input(&mut self) -> TransportResult<Input> {
        match self.lines.next_line().await {
            Ok(Some(line)) => Ok(Input::Line(line)),
            Ok(None) => Ok(Input::End),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Unreadable input line: {}", e);
                Ok(Input::Unreadable(e))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn goodbye(&mut self) -> TransportResult<()> {
        self.write("\nGoodbye!\n").await
    }

    async fn write(&mut self, text: &str) -> TransportResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::tools::ToolRegistry;

    async fn run_session(input: impl AsRef<[u8]>) -> String {
        let server = ToolServer::new(Config::default(), ToolRegistry::builtin());
        let mut session = CliSession::new(server, input.as_ref(), Vec::new());
        session.run().await.unwrap();
        String::from_utf8(session.into_writer()).unwrap()
    }

    #[tokio::test]
    async fn test_banner_lists_tools() {
        let output = run_session("quit\n").await;
        assert!(output.starts_with("Simple MCP-style Tool Server - CLI Mode\n"));
        assert!(output.contains("  - count_words: Count the total number of words in the given text"));
        assert!(output.trim_end().ends_with("Goodbye!"));
    }

    #[tokio::test]
    async fn test_tool_call_prints_result() {
        let output = run_session("count_total_rs\nStrawberry\nq\n").await;
        assert!(output.contains("Enter text to analyze:"));
        assert!(output.contains("Result: 3\n"));
    }

    #[tokio::test]
    async fn test_tool_name_is_trimmed() {
        let output = run_session("  count_words  \n  one two  three \nexit\n").await;
        assert!(output.contains("Result: 3\n"));
    }

    #[tokio::test]
    async fn test_unknown_tool_continues_loop() {
        let output = run_session("nope\ncount_total_characters\ncafé\nquit\n").await;
        assert!(output.contains("Tool 'nope' not found\n"));
        assert!(output.contains("Result: 4\n"));
    }

    #[tokio::test]
    async fn test_exit_commands_are_case_insensitive() {
        let output = run_session("QUIT\ncount_words\nshould not run\n").await;
        assert!(!output.contains("Result:"));
        assert!(output.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits_cleanly() {
        let output = run_session("count_words\n").await;
        assert!(!output.contains("Result:"));
        assert!(output.contains("Goodbye!"));

        let output = run_session("").await;
        assert!(output.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_empty_text_counts_zero() {
        let output = run_session("count_words\n\nquit\n").await;
        assert!(output.contains("Result: 0\n"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_text_reports_error_and_continues() {
        let output = run_session(b"count_words\n\xff\xfe\ncount_words\na b\nquit\n").await;
        assert!(output.contains("Error: stream did not contain valid UTF-8\n"));
        assert!(output.contains("Result: 2\n"));
        assert!(output.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_tool_name_reports_error_and_continues() {
        let output = run_session(b"\xc3\x28\ncount_total_rs\nrare\nq\n").await;
        assert!(output.contains("Error: "));
        assert!(output.contains("Result: 2\n"));
        assert!(output.contains("Goodbye!"));
    }
}
