use miette::Result;

/// Main entry point for the deps2mermaid CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    deps2mermaid::run()
}
