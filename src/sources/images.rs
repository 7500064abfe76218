/// Shown when a series payload has no image path.
pub const TMDB_PLACEHOLDER: &str = "https://via.placeholder.com/500x750/1a0033/00ff00?text=No+Image";
/// Shown when a book has neither a cover id nor an edition key.
pub const BOOK_COVER_PLACEHOLDER: &str = "https://via.placeholder.com/300x450/1a0033/00ff00?text=Sem+Capa";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Poster,
    Backdrop,
    Profile,
}

impl ImageKind {
    /// Size token in the image CDN path.
    pub fn size(self) -> &'static str {
        match self {
            ImageKind::Poster => "w500",
            ImageKind::Backdrop => "w1280",
            ImageKind::Profile => "w185",
        }
    }
}

/// `{base}/{size}{path}`, or the placeholder when `path` is absent or blank.
pub fn tmdb_image_url(base: &str, kind: ImageKind, path: Option<&str>) -> String {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => {
            let sep = if p.starts_with('/') { "" } else { "/" };
            format!("{}/{}{}{}", base.trim_end_matches('/'), kind.size(), sep, p)
        }
        None => TMDB_PLACEHOLDER.to_string(),
    }
}

/// Large cover by cover id, else by edition key, else the placeholder.
pub fn open_library_cover_url(covers_base: &str, cover_id: Option<i64>, edition_key: Option<&str>) -> String {
    let base = covers_base.trim_end_matches('/');
    if let Some(id) = cover_id.filter(|id| *id > 0) {
        return format!("{base}/id/{id}-L.jpg");
    }
    if let Some(olid) = edition_key.map(str::trim).filter(|k| !k.is_empty()) {
        return format!("{base}/olid/{olid}-L.jpg");
    }
    BOOK_COVER_PLACEHOLDER.to_string()
}

pub fn is_placeholder(url: &str) -> bool {
    url.contains("placeholder")
}
