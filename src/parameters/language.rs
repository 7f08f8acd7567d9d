/// Language codes the Dark Sky API can return summaries in.
pub(crate) const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "az", "be", "bg", "bn", "bs", "ca", "cs", "da", "de", "el", "en", "eo", "es", "et",
    "fi", "fr", "he", "hi", "hr", "hu", "id", "is", "it", "ja", "ka", "kn", "ko", "kw", "lv",
    "ml", "mr", "nb", "nl", "no", "pa", "pl", "pt", "ro", "ru", "sk", "sl", "sr", "sv", "ta",
    "te", "tet", "tr", "uk", "ur", "x-pig-latin", "zh", "zh-tw",
];

pub(crate) fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}
