//! Fixed user-facing strings. Shown verbatim, in Indonesian.

pub const EMPTY_URL: &str = "Silakan masukkan URL TikTok";
pub const INVALID_URL: &str = "URL TikTok tidak valid";
pub const RETRIEVAL_FAILED: &str = "Terjadi kesalahan saat mengambil data video";
pub const DOWNLOAD_STARTED: &str = "Download dimulai...";
pub const MUSIC_DOWNLOAD_STARTED: &str = "Download musik dimulai...";
pub const CONTACT_SENT: &str = "Pesan berhasil dikirim! Terima kasih telah menghubungi kami.";
