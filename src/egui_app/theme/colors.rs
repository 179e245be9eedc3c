//! Color Constants
//!
//! Institutional blue/slate scheme used throughout the client.

use eframe::egui::Color32;

/// Main sidebar background - Deep navy
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(0x1B, 0x26, 0x35);

/// Active item highlight strip - Mid blue
pub const ACTIVE_CHAT_STRIP: Color32 = Color32::from_rgb(0x2C, 0x41, 0x5C);

/// Sidebar list background - Dark slate
pub const CHAT_LIST_BG: Color32 = Color32::from_rgb(0x22, 0x30, 0x42);

/// Sidebar list hovered or selected item - Lighter slate
pub const CHAT_LIST_HOVER: Color32 = Color32::from_rgb(0x33, 0x47, 0x60);

/// Sidebar item text - Off-white
pub const CHAT_ITEM_TEXT: Color32 = Color32::from_rgb(0xE8, 0xED, 0xF2);

/// Main content background - Very light grey-blue
pub const MAIN_CHAT_BG: Color32 = Color32::from_rgb(0xF2, 0xF5, 0xF8);

/// Message bubble outgoing - Pale blue
pub const BUBBLE_OUTGOING: Color32 = Color32::from_rgb(0xC9, 0xDD, 0xF0);

/// Message bubble incoming - Light grey
pub const BUBBLE_INCOMING: Color32 = Color32::from_rgb(0xE4, 0xE9, 0xEE);

/// Message bubble border - Muted blue-grey
pub const BUBBLE_BORDER: Color32 = Color32::from_rgb(0xAF, 0xC0, 0xD2);

/// Top bar background - Dark navy
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x16, 0x20, 0x2D);

/// Chat header background - Light grey-blue
pub const CHAT_HEADER_BG: Color32 = Color32::from_rgb(0xE9, 0xEE, 0xF3);

/// Input bar background - Light grey
pub const INPUT_BAR_BG: Color32 = Color32::from_rgb(0xE2, 0xE8, 0xEF);

/// Input bar border - Muted grey-blue
pub const INPUT_BAR_BORDER: Color32 = Color32::from_rgb(0xB4, 0xC2, 0xD2);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xED, 0xF2);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x1B, 0x26, 0x35);

/// Secondary text on any background
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x7C, 0x8B, 0x9C);

/// Accent - Institutional blue
pub const ACCENT: Color32 = Color32::from_rgb(0x2E, 0x6F, 0xC2);

/// Primary button fill
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x2E, 0x6F, 0xC2);

/// Central panel background when nothing light is drawn
pub const BG_DARK: Color32 = Color32::from_rgb(0x1B, 0x26, 0x35);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xD9, 0x48, 0x48);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
