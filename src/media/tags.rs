/// EXIF field extraction
///
/// Reads the five fields shown in the metadata table. Any field that is
/// missing, or a file with no readable EXIF block at all, shows "Unknown".
use exif::{Exif, Field, In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::state::data::ExifFields;

/// Read the EXIF fields of the file at `path`
pub fn read_fields(path: &Path) -> ExifFields {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No EXIF: cannot open file");
            return ExifFields::default();
        }
    };

    match exif::Reader::new().read_from_container(&mut BufReader::new(file)) {
        Ok(exif) => fields_from(&exif),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No EXIF data");
            ExifFields::default()
        }
    }
}

/// Pick and format the displayed fields from parsed EXIF data
pub fn fields_from(exif: &Exif) -> ExifFields {
    let get = |tag| exif.get_field(tag, In::PRIMARY);
    let mut fields = ExifFields::default();

    if let Some(f) = get(Tag::Model) {
        fields.camera = text_value(f);
    }
    if let Some(f) = get(Tag::PhotographicSensitivity) {
        fields.iso = f.display_value().to_string();
    }
    if let Some(s) = get(Tag::FNumber).and_then(|f| f_stop(&f.value)) {
        fields.f_stop = s;
    }
    if let Some(f) = get(Tag::ExposureTime) {
        fields.exposure = format!("{}s", f.display_value());
    }
    if let Some(f) = get(Tag::WhiteBalance) {
        fields.white_balance = f.display_value().to_string();
    }

    fields
}

/// `f/<a÷b>` for a rational aperture, None for anything else
pub fn f_stop(value: &Value) -> Option<String> {
    match value {
        Value::Rational(v) if !v.is_empty() && v[0].denom != 0 => {
            let r = v[0];
            Some(format!("f/{}", r.num as f64 / r.denom as f64))
        }
        _ => None,
    }
}

/// ASCII tags come back quoted and NUL padded; strip both
fn text_value(field: &Field) -> String {
    match &field.value {
        Value::Ascii(parts) => parts
            .iter()
            .map(|bytes| {
                String::from_utf8_lossy(bytes)
                    .trim_matches(char::from(0))
                    .trim()
                    .to_string()
            })
            .collect::<Vec<String>>()
            .join(" "),
        _ => field.display_value().to_string().replace('"', "").trim().to_string(),
    }
}
