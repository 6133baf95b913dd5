//! Presentation options attached to a shared invoice.
//!
//! Pure pass-through configuration: the store and the API never interpret
//! these values, they only round-trip them to the viewer page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Modern,
    Classic,
    Minimal,
    Creative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    #[serde(rename = "A4")]
    A4,
    #[serde(rename = "Letter")]
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    Minimal,
    Striped,
    Borders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPosition {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccentStyle {
    None,
    TopLine,
    TopBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoSize {
    Sm,
    Md,
    Lg,
}

/// Wire strings match the template tokens the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDay,
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "DD Mon YYYY")]
    DayMonthNameYear,
}

/// Flat theming configuration for the invoice preview and PDF export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignOptions {
    pub primary_color: String,
    pub text_color: String,
    pub background_color: String,
    pub border_color: String,
    pub font_family: String,
    pub base_font_size: u32,
    pub line_height: f64,
    pub border_radius: u32,
    pub spacing: u32,
    pub header_alignment: Alignment,
    pub logo_position: Alignment,
    pub show_logo: bool,
    pub show_dividers: bool,
    pub theme: Theme,
    pub paper_size: PaperSize,
    pub table_style: TableStyle,
    pub currency_position: CurrencyPosition,
    pub decimals: u8,
    pub accent_style: AccentStyle,
    pub logo_size: LogoSize,
    pub date_format: DateFormat,
    pub watermark_text: String,
    pub watermark_opacity: f64,
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self {
            primary_color: "#1F2937".to_string(),
            text_color: "#111827".to_string(),
            background_color: "#FFFFFF".to_string(),
            border_color: "#E5E7EB".to_string(),
            font_family: "Inter".to_string(),
            base_font_size: 14,
            line_height: 1.6,
            border_radius: 12,
            spacing: 24,
            header_alignment: Alignment::Center,
            logo_position: Alignment::Left,
            show_logo: true,
            show_dividers: true,
            theme: Theme::Modern,
            paper_size: PaperSize::A4,
            table_style: TableStyle::Minimal,
            currency_position: CurrencyPosition::Before,
            decimals: 2,
            accent_style: AccentStyle::None,
            logo_size: LogoSize::Md,
            date_format: DateFormat::YearMonthDay,
            watermark_text: "Invoice Meta".to_string(),
            watermark_opacity: 0.1,
        }
    }
}
