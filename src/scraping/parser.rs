//! Markup parsers for the lottery page.
//!
//! Both parsers are pure: they take a document body and return data. Structural
//! drift on the external site shows up here as a [`LottoscopeError::Parse`] (no
//! frequency cells at all) or as individually skipped cells.

use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::config::ScraperConfig;
use crate::constants::is_valid_number;
use crate::error::{LottoscopeError, Result};
use crate::frequency::FrequencyTable;

/// Compiled CSS selectors for the page structure
#[derive(Debug, Clone)]
pub struct PageSelectors {
    cell: Selector,
    ball: Selector,
    drawn_count: Selector,
    jackpot: Selector,
    cell_source: String,
}

impl PageSelectors {
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            cell: compile(&config.frequency_cell_selector)?,
            ball: compile(&config.ball_selector)?,
            drawn_count: compile(&config.drawn_count_selector)?,
            jackpot: compile(&config.jackpot_selector)?,
            cell_source: config.frequency_cell_selector.clone(),
        })
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| {
        LottoscopeError::config_error(format!("Invalid CSS selector '{}': {}", selector, e))
    })
}

/// Extract the number → drawn-count table from the page
///
/// Fails only when no frequency cell is found. A cell whose number or count does
/// not parse is logged and skipped; the rest of the batch is kept.
pub fn parse_frequency_table(html: &str, selectors: &PageSelectors) -> Result<FrequencyTable> {
    let document = Html::parse_document(html);
    let cells: Vec<ElementRef<'_>> = document.select(&selectors.cell).collect();

    if cells.is_empty() {
        return Err(LottoscopeError::parse(format!(
            "Unable to find table cells for lotto numbers (selector '{}')",
            selectors.cell_source
        )));
    }

    let mut counts = BTreeMap::new();
    let mut skipped = 0usize;

    for (index, cell) in cells.iter().enumerate() {
        match parse_cell(cell, selectors) {
            Ok((number, drawn)) => {
                counts.insert(number, drawn);
            }
            Err(e) => {
                skipped += 1;
                warn!(cell_index = index, error = %e, "Skipped malformed cell during scraping");
            }
        }
    }

    debug!(
        cells = cells.len(),
        entries = counts.len(),
        skipped,
        "Parsed draw frequency table"
    );

    Ok(FrequencyTable::from(counts))
}

fn parse_cell(cell: &ElementRef<'_>, selectors: &PageSelectors) -> Result<(u8, u32)> {
    let ball = first_text(cell, &selectors.ball)
        .ok_or_else(|| LottoscopeError::malformed("cell has no ball element"))?;
    let number: u8 = ball
        .parse()
        .map_err(|_| LottoscopeError::malformed(format!("ball '{}' is not a number", ball)))?;
    if !is_valid_number(number) {
        return Err(LottoscopeError::malformed(format!(
            "ball {} is outside the drawable range",
            number
        )));
    }

    let drawn = first_text(cell, &selectors.drawn_count)
        .ok_or_else(|| LottoscopeError::malformed(format!("ball {} has no drawn count", number)))?;
    let count: u32 = drawn.parse().map_err(|_| {
        LottoscopeError::malformed(format!("drawn count '{}' for ball {} is not a number", drawn, number))
    })?;

    Ok((number, count))
}

/// Extract the jackpot display string, if the page still carries one
pub fn parse_jackpot(html: &str, selectors: &PageSelectors) -> Option<String> {
    let document = Html::parse_document(html);
    let root = document.root_element();
    first_text(&root, &selectors.jackpot).filter(|text| !text.is_empty())
}

fn first_text(parent: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    parent.select(selector).next().map(|element| {
        element
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    })
}
