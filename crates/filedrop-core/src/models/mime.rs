/// Coarse file category derived from the browser-reported MIME type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MimeCategory {
    Image,
    Video,
    Audio,
    Pdf,
    Document,
    Spreadsheet,
    Presentation,
    Archive,
    Other,
}

impl MimeCategory {
    /// Classify a MIME type string. Parameters (`; charset=...`) are ignored.
    pub fn from_mime(mime_type: &str) -> Self {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        let (top, sub) = essence.split_once('/').unwrap_or((essence.as_str(), ""));
        match top {
            "image" => return Self::Image,
            "video" => return Self::Video,
            "audio" => return Self::Audio,
            "text" if sub == "csv" => return Self::Spreadsheet,
            "text" => return Self::Document,
            _ => {}
        }

        match sub {
            "pdf" => Self::Pdf,
            "msword" | "rtf" | "vnd.openxmlformats-officedocument.wordprocessingml.document"
            | "vnd.oasis.opendocument.text" => Self::Document,
            "vnd.ms-excel"
            | "vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            | "vnd.oasis.opendocument.spreadsheet" => Self::Spreadsheet,
            "vnd.ms-powerpoint"
            | "vnd.openxmlformats-officedocument.presentationml.presentation"
            | "vnd.oasis.opendocument.presentation" => Self::Presentation,
            "zip" | "x-zip-compressed" | "gzip" | "x-gzip" | "x-tar" | "x-7z-compressed"
            | "vnd.rar" | "x-rar-compressed" => Self::Archive,
            _ => Self::Other,
        }
    }
}
