//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Folio;

/// Generate the blog index, post documents, sitemap and robots.txt
pub fn run(folio: &Folio) -> Result<usize> {
    let start = std::time::Instant::now();

    let written = Generator::new(folio).generate()?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} posts into {:?} in {:.2}s",
        written,
        folio.public_dir,
        duration.as_secs_f64()
    );

    Ok(written)
}
