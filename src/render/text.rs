use std::fmt;

use crate::config::PageConfig;
use crate::constants::{NO_DISTRIBUTION_MESSAGE, NO_MATCHES_MESSAGE};
use crate::render::DashboardView;

const DIVIDER_WIDTH: usize = 60;
const BAR_WIDTH: usize = 30;

/// Plain-text dashboard for the terminal
pub fn render_text(view: &DashboardView, page: &PageConfig) -> String {
    TextReport { view, page }.to_string()
}

struct TextReport<'a> {
    view: &'a DashboardView,
    page: &'a PageConfig,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;
        writeln!(f, "{}", self.page.title)?;
        writeln!(f, "{}", self.page.tagline)?;
        writeln!(f)?;
        writeln!(
            f,
            "Type: {} | Search: \"{}\" | Sort: {}",
            view.criteria.selected_type.label(),
            view.criteria.search_term,
            view.criteria.sort_order.label()
        )?;
        writeln!(f)?;

        writeln!(f, "== Pasta Showcase ({} shown) ==", view.records.len())?;
        if view.rows.is_empty() {
            writeln!(f, "{}", NO_MATCHES_MESSAGE)?;
        }
        for row in &view.rows {
            for card in &row.cards {
                writeln!(f, "### {}", card.name)?;
                writeln!(f, "Type: {}", card.pasta_type)?;
                writeln!(f, "Description: {}", card.description)?;
                writeln!(f, "Origin: {}", card.origin)?;
                writeln!(f, "Translation: {}", card.translation)?;
                writeln!(f, "Common Uses: {}", card.common_uses)?;
                writeln!(f, "Image: {}", card.image_url)?;
            }
            writeln!(f, "{}", "-".repeat(DIVIDER_WIDTH))?;
        }
        writeln!(f)?;

        writeln!(f, "== Pasta Type Distribution ==")?;
        if view.bars.is_empty() {
            writeln!(f, "{}", NO_DISTRIBUTION_MESSAGE)?;
        }
        let label_width = view.bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
        for bar in &view.bars {
            let filled = (bar.percent as usize * BAR_WIDTH).div_ceil(100);
            writeln!(
                f,
                "{:<width$} {} {}",
                bar.label,
                "#".repeat(filled),
                bar.count,
                width = label_width
            )?;
        }

        if !view.map_points.is_empty() {
            writeln!(f)?;
            writeln!(f, "== Origins ==")?;
            for point in &view.map_points {
                writeln!(f, "- {} ({:.4}, {:.4})", point.name, point.latitude, point.longitude)?;
            }
        }

        if !view.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "== General Nutritional Insights ==")?;
            for note in &view.notes {
                writeln!(f, "- {}", note)?;
            }
        }
        Ok(())
    }
}
