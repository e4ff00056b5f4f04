use std::io::Write;

use crate::{
    config::Config,
    generators::Eller,
    renderers::RowView,
};

/// Drives generation and rendering, one row at a time.
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        App { config }
    }

    /// Generates the maze and writes each row to `out` as soon as it is built.
    ///
    /// Only the current row and the one before it exist at any time, so the
    /// maze can be far larger than what would fit in memory as a whole.
    pub fn run(&self, out: &mut impl Write) -> std::io::Result<()> {
        let Config {
            width,
            height,
            format,
            fill,
            seed,
        } = self.config;

        tracing::info!(
            "[app] generating {}x{} maze ({}, seed {:?})",
            width,
            height,
            format,
            seed
        );

        let mut eller = Eller::new(width, seed);
        let mut text = String::new();
        for y in 0..height {
            let is_last = y + 1 == height;
            eller.generate_row(is_last);

            text.clear();
            let view = RowView {
                cells: eller.row(),
                previous: eller.previous_row(),
                labels: eller.labels(),
                is_first: y == 0,
                is_last,
            };
            format
                .render_row(&view, fill, &mut text)
                .map_err(std::io::Error::other)?;
            out.write_all(text.as_bytes())?;
        }
        out.flush()?;

        tracing::info!("[app] finished {} row(s)", height);
        Ok(())
    }

    /// Renders the whole maze into a string.
    pub fn render_to_string(&self) -> String {
        let mut out = Vec::new();
        self.run(&mut out).expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&out).into_owned()
    }
}
