//! Audio artifacts and generation requests.
//!
//! An artifact is the transient binary package handed to the upload gateway:
//! bytes, a mime type, and a name. Generated artifacts are always mp3 with a
//! fresh `podcast-<uuid>.mp3` name; uploaded artifacts keep the picked file's
//! name and declared audio mime type.

use bytes::Bytes;
use uuid::Uuid;

use super::tts::VoiceType;

/// Mime type of generated audio artifacts.
pub const AUDIO_MPEG: &str = "audio/mpeg";

/// A synthesis request: which voice to use and what to say.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub voice: VoiceType,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(voice: VoiceType, prompt: impl Into<String>) -> Self {
        Self {
            voice,
            prompt: prompt.into(),
        }
    }

    /// Whether the prompt is empty or whitespace-only.
    ///
    /// An empty prompt aborts the generation workflow before any remote
    /// call is made.
    pub fn is_empty(&self) -> bool {
        self.prompt.trim().is_empty()
    }
}

/// A transient audio payload bound for the upload gateway.
///
/// Not persisted locally beyond the upload call; a new artifact is created
/// on each generate-or-upload action.
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub bytes: Bytes,
    pub mime_type: String,
    pub file_name: String,
}

impl AudioArtifact {
    /// Wrap synthesized audio with a freshly generated unique name.
    pub fn generated(bytes: Bytes) -> Self {
        Self {
            bytes,
            mime_type: AUDIO_MPEG.to_string(),
            file_name: format!("podcast-{}.mp3", Uuid::new_v4()),
        }
    }

    /// Wrap a user-picked file.
    ///
    /// Returns `None` when the declared content type is not an audio type;
    /// the file picker only accepts audio MIME types and the gateway holds
    /// the same line.
    pub fn from_upload(
        file_name: impl Into<String>,
        content_type: &str,
        bytes: Bytes,
    ) -> Option<Self> {
        if !is_audio_mime(content_type) {
            return None;
        }
        Some(Self {
            bytes,
            mime_type: content_type.to_string(),
            file_name: file_name.into(),
        })
    }
}

/// Check whether a declared content type is an audio type.
pub fn is_audio_mime(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|main| main.trim().to_ascii_lowercase().starts_with("audio/"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_detection() {
        assert!(GenerationRequest::new(VoiceType::Alloy, "").is_empty());
        assert!(GenerationRequest::new(VoiceType::Alloy, "   \t\n").is_empty());
        assert!(!GenerationRequest::new(VoiceType::Alloy, "Hello world").is_empty());
    }

    #[test]
    fn test_generated_artifact_naming() {
        let artifact = AudioArtifact::generated(Bytes::from_static(b"abc"));
        assert!(artifact.file_name.starts_with("podcast-"));
        assert!(artifact.file_name.ends_with(".mp3"));
        assert_eq!(artifact.mime_type, AUDIO_MPEG);
    }

    #[test]
    fn test_generated_names_unique() {
        let a = AudioArtifact::generated(Bytes::new());
        let b = AudioArtifact::generated(Bytes::new());
        assert_ne!(a.file_name, b.file_name);
    }

    #[test]
    fn test_upload_accepts_audio_mime() {
        let artifact =
            AudioArtifact::from_upload("clip.mp3", "audio/mpeg", Bytes::from_static(b"xyz"));
        let artifact = artifact.unwrap();
        assert_eq!(artifact.file_name, "clip.mp3");
        assert_eq!(artifact.mime_type, "audio/mpeg");
    }

    #[test]
    fn test_upload_rejects_non_audio_mime() {
        assert!(AudioArtifact::from_upload("doc.pdf", "application/pdf", Bytes::new()).is_none());
        assert!(AudioArtifact::from_upload("img.png", "image/png", Bytes::new()).is_none());
    }

    #[test]
    fn test_audio_mime_with_parameters() {
        assert!(is_audio_mime("audio/ogg; codecs=opus"));
        assert!(is_audio_mime("AUDIO/WAV"));
        assert!(!is_audio_mime("text/plain"));
        assert!(!is_audio_mime(""));
    }
}
