//! # Customer Agreement
//!
//! The agreement form and its signature pad. Signatures are kept as pen
//! strokes and exported as an SVG data URL.

use chrono::NaiveDate;
use lib_utils::{b64_encode, date_stamp, validate_min_length};

use crate::app::notifications::{Notifications, Toast, ToastVariant};
use crate::core::error::{AppError, Result};

pub const MISSING_SIGNATURE_MESSAGE: &str = "Please sign the agreement before submitting";
pub const EMPTY_SIGNATURE_MESSAGE: &str = "Please provide a signature before saving";

const STROKE_WIDTH: f32 = 2.0;

/// A validated agreement, ready to hand to the back office.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgreementSubmission {
    pub customer_name: String,
    pub id_number: String,
    /// `YYYY-MM-DD`
    pub agreement_date: String,
    /// Signature as a data URL
    pub customer_signature: String,
}

#[derive(Debug)]
pub struct AgreementForm {
    pub customer_name: String,
    pub id_number: String,
    pub agreement_date: Option<NaiveDate>,
    signature: Option<String>,
    pub notifications: Notifications,
}

impl AgreementForm {
    /// Empty form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            customer_name: String::new(),
            id_number: String::new(),
            agreement_date: Some(today),
            signature: None,
            notifications: Notifications::new(),
        }
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Store the signature saved from a [`SignaturePad`].
    pub fn set_signature(&mut self, data_url: impl Into<String>) {
        self.signature = Some(data_url.into());
    }

    /// Field checks in form order; the first failure wins.
    pub fn validate(&self) -> Result<AgreementSubmission> {
        validate_min_length(&self.customer_name, 2, "Name")
            .map_err(|_| AppError::Validation("Please enter your full name".to_string()))?;
        validate_min_length(&self.id_number, 3, "ID")
            .map_err(|_| {
                AppError::Validation("Please enter a valid ID or passport number".to_string())
            })?;
        let date = self
            .agreement_date
            .ok_or_else(|| AppError::Validation("Please select a date".to_string()))?;
        let signature = self
            .signature
            .clone()
            .ok_or_else(|| AppError::Validation(MISSING_SIGNATURE_MESSAGE.to_string()))?;

        Ok(AgreementSubmission {
            customer_name: self.customer_name.clone(),
            id_number: self.id_number.clone(),
            agreement_date: date_stamp(date),
            customer_signature: signature,
        })
    }

    pub fn submit(&mut self) -> Result<AgreementSubmission> {
        match self.validate() {
            Ok(submission) => {
                tracing::info!(
                    customer = %submission.customer_name,
                    date = %submission.agreement_date,
                    "Agreement submitted"
                );
                self.notifications.push(Toast::plain(
                    "Agreement submitted successfully",
                    ToastVariant::Default,
                ));
                Ok(submission)
            }
            Err(e) => {
                if let AppError::Validation(text) = &e {
                    self.notifications
                        .push(Toast::plain(text.clone(), ToastVariant::Destructive));
                }
                Err(e)
            }
        }
    }
}

/// Freehand signature capture.
#[derive(Debug, Clone, Default)]
pub struct SignaturePad {
    strokes: Vec<Vec<(f32, f32)>>,
}

impl SignaturePad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at `(x, y)`.
    pub fn begin_stroke(&mut self, x: f32, y: f32) {
        self.strokes.push(vec![(x, y)]);
    }

    /// Extend the current stroke; starts one if none is open.
    pub fn line_to(&mut self, x: f32, y: f32) {
        match self.strokes.last_mut() {
            Some(stroke) => stroke.push((x, y)),
            None => self.begin_stroke(x, y),
        }
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// The signature as an SVG cropped to the ink.
    pub fn to_svg(&self) -> Option<String> {
        let points = self.strokes.iter().flatten();
        let (min_x, min_y, max_x, max_y) = points.fold(None, |acc, &(x, y)| match acc {
            None => Some((x, y, x, y)),
            Some((a, b, c, d)) => Some((a.min(x), b.min(y), c.max(x), d.max(y))),
        })?;

        let pad = STROKE_WIDTH;
        let width = (max_x - min_x) + pad * 2.0;
        let height = (max_y - min_y) + pad * 2.0;

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        );
        for stroke in &self.strokes {
            let path: Vec<String> = stroke
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| {
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    format!("{}{} {}", cmd, x - min_x + pad, y - min_y + pad)
                })
                .collect();
            svg.push_str(&format!(
                r#"<path d="{}" fill="none" stroke="black" stroke-width="{}" stroke-linecap="round"/>"#,
                path.join(" "),
                STROKE_WIDTH
            ));
        }
        svg.push_str("</svg>");
        Some(svg)
    }

    /// Export as a `data:image/svg+xml;base64,...` URL.
    pub fn save(&self) -> Result<String> {
        let svg = self
            .to_svg()
            .ok_or_else(|| AppError::Validation(EMPTY_SIGNATURE_MESSAGE.to_string()))?;
        Ok(format!("data:image/svg+xml;base64,{}", b64_encode(svg)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_pad() -> SignaturePad {
        let mut pad = SignaturePad::new();
        pad.begin_stroke(10.0, 20.0);
        pad.line_to(30.0, 25.0);
        pad.line_to(50.0, 20.0);
        pad
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    #[test]
    fn test_signature_pad_save() {
        let mut pad = SignaturePad::new();
        assert!(pad.is_empty());
        assert!(matches!(
            pad.save(),
            Err(AppError::Validation(m)) if m == EMPTY_SIGNATURE_MESSAGE
        ));

        pad = signed_pad();
        let url = pad.save().unwrap();
        assert!(url.starts_with("data:image/svg+xml;base64,"));

        let svg = pad.to_svg().unwrap();
        assert!(svg.contains(r#"viewBox="0 0 44 9""#));
        assert!(svg.contains("M2 2 L22 7 L42 2"));

        pad.clear();
        assert!(pad.is_empty());
    }

    #[test]
    fn test_rules_apply_in_order() {
        let mut form = AgreementForm::new(today());
        assert!(matches!(
            form.validate(),
            Err(AppError::Validation(m)) if m == "Please enter your full name"
        ));

        form.customer_name = "Jo".to_string();
        form.id_number = "AB".to_string();
        assert!(matches!(
            form.validate(),
            Err(AppError::Validation(m)) if m == "Please enter a valid ID or passport number"
        ));

        form.id_number = "AB1".to_string();
        form.agreement_date = None;
        assert!(matches!(
            form.validate(),
            Err(AppError::Validation(m)) if m == "Please select a date"
        ));

        form.agreement_date = Some(today());
        assert!(form.submit().is_err());
        assert_eq!(form.notifications.last().unwrap().title, MISSING_SIGNATURE_MESSAGE);
    }

    #[test]
    fn test_submit_formats_date() {
        let mut form = AgreementForm::new(today());
        form.customer_name = "Jo Trader".to_string();
        form.id_number = "P1234567".to_string();
        form.set_signature(signed_pad().save().unwrap());

        let submission = form.submit().unwrap();

        assert_eq!(submission.agreement_date, "2024-02-29");
        assert!(submission.customer_signature.starts_with("data:image/svg+xml"));
        assert_eq!(
            form.notifications.last().unwrap().title,
            "Agreement submitted successfully"
        );
    }
}
