// User-facing text. The pages ship in German.

use apps_core::{GeoFix, HeadingReading, SensorError, StatusMessage};

pub const EMPTY_SCRIPT_ALERT: &str = "Bitte gib zuerst Text in das Feld ein.";
pub const SAVE_LABEL: &str = "<i class=\"ph ph-floppy-disk\"></i> Speichern";
pub const SAVED_LABEL: &str = "Gespeichert!";
pub const SAVE_FAILED_LABEL: &str = "Fehler!";

/// Status line markup for the hunter page. May contain a highlight span.
pub fn status_html(status: &StatusMessage) -> String {
    match status {
        StatusMessage::Starting => String::new(),
        StatusMessage::OrientationPrompt => {
            "Bitte tippen Sie auf <span class=\"highlight\">Standort markieren</span>, um Zugriff auf Orientierung zu erlauben".to_string()
        }
        StatusMessage::OrientationAvailable => "Orientierung verfügbar".to_string(),
        StatusMessage::OrientationSimulated(e) => format!(
            "<span class=\"highlight\">{}</span> - Simulation aktiv",
            compass_problem(e)
        ),
        StatusMessage::Locating => "Standort wird ermittelt...".to_string(),
        StatusMessage::PositionSimulated(e) => format!(
            "{} - Simulation aktiv<br>Bereit (Simulierter Standort)",
            position_problem(e)
        ),
        StatusMessage::Ready { accuracy_m } => {
            format!("Bereit. GPS-Genauigkeit: ±{}m", accuracy_m.round() as i64)
        }
        StatusMessage::Marked => "Position markiert!".to_string(),
        StatusMessage::AwaitingMark => "Bereit für neue Markierung".to_string(),
    }
}

/// Status line with an optional earlier line above it.
pub fn status_block_html(note: Option<&StatusMessage>, status: &StatusMessage) -> String {
    match note {
        Some(note) => format!("{}<br>{}", status_html(note), status_html(status)),
        None => status_html(status),
    }
}

fn compass_problem(e: &SensorError) -> String {
    match e {
        SensorError::CapabilityAbsent => "Kompass nicht verfügbar".to_string(),
        SensorError::PermissionDenied => "Zugriff verweigert".to_string(),
        SensorError::Transient(msg) => format!("Kompassfehler: {}", escape_html(msg)),
    }
}

fn position_problem(e: &SensorError) -> String {
    match e {
        SensorError::CapabilityAbsent => {
            "<span class=\"highlight\">Standort nicht verfügbar</span>".to_string()
        }
        SensorError::PermissionDenied => {
            "<span class=\"highlight\">Standortfehler:</span> Zugriff verweigert".to_string()
        }
        SensorError::Transient(msg) => format!(
            "<span class=\"highlight\">Standortfehler:</span> {}",
            escape_html(msg)
        ),
    }
}

/// `"123°"`
pub fn heading_text(heading: &HeadingReading) -> String {
    format!("{}°", heading.rounded())
}

/// CSS transform that counter-rotates the compass rose.
pub fn rose_transform(heading: &HeadingReading) -> String {
    format!("rotate({}deg)", -heading.degrees())
}

pub fn coords_text(fix: &GeoFix) -> String {
    fix.format_coords()
}

pub fn font_text(font_px: u32) -> String {
    format!("{}px", font_px)
}

/// Sensor error messages come from the platform; keep them inert.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
