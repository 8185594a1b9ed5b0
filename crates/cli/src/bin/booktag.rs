use anyhow::Result;

fn main() -> Result<()> {
    booktag_cli::main_entry()
}
