/// Scene title.
pub const TITLE: &str = "Jungle Pursuit";

/// Scene blurb.
pub const SUBTITLE: &str = "A stylized cinematic loop of a determined boy sprinting through a lush \
jungle canopy while a pack of wolves give chase. Layers of parallax greenery and fireflies bring \
the dense wilderness to life.";

/// Record control label while idle.
pub const RECORD_LABEL_IDLE: &str = "Record 7s Clip";
/// Record control label while a clip is being captured.
pub const RECORD_LABEL_ACTIVE: &str = "Recording…";
/// Label of the download action for a finished clip.
pub const DOWNLOAD_LABEL: &str = "Download clip";

/// Label for the record control in the given state.
pub fn record_label(recording: bool) -> &'static str {
    if recording {
        RECORD_LABEL_ACTIVE
    } else {
        RECORD_LABEL_IDLE
    }
}
