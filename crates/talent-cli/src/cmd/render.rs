use anyhow::Context;
use std::path::Path;
use talent_core::dashboard::DashboardView;
use talent_core::filter::DashboardFilter;

pub fn run(
    root: &Path,
    out: Option<&Path>,
    sl: Option<&str>,
    range: Option<&str>,
) -> anyhow::Result<()> {
    let ctx = super::load_context(root)?;
    let filter = DashboardFilter::from_query(sl, range)?;
    let today = chrono::Local::now().date_naive();
    let view = DashboardView::build(&ctx, &filter, today)?;
    let html = talent_server::render::render_page(&view);

    match out {
        Some(path) => {
            talent_core::io::atomic_write(path, html.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
