pub mod artifact;
pub mod storage;
pub mod tts;

pub use artifact::{AUDIO_MPEG, AudioArtifact, GenerationRequest};
pub use storage::{ObjectGateway, StorageError, StorageReference};
pub use tts::{SpeechModel, SpeechSynthesizer, TtsError, VoiceType};
