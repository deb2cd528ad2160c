use std::process::ExitCode;

fn main() -> ExitCode {
    eal_qa_cli::run_tool(eal_qa_cli::assessment::run)
}
