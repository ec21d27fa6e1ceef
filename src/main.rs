use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = asset_relocate::cli::parse();
    app::run(args)
}
