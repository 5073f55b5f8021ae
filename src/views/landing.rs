use crate::api::ANALYZE_PATH;

pub fn render() -> String {
    format!(
        "Ops Notes Analyzer\n\
         ==================\n\
         Paste stand-up notes, chat logs or meeting minutes.\n\
         They are sent to {ANALYZE_PATH} and the results open on /dashboard.\n"
    )
}
