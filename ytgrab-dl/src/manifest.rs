//! Stream manifest model deserialized from the client's JSON info dump.

use serde::Deserialize;

/// Identity of a resolved video.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
}

/// One downloadable audio or video variant.
///
/// The client marks an absent codec with the literal string `"none"`;
/// the predicates below fold that into the missing-field case.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StreamDescriptor {
    pub format_id: String,

    /// Container extension, e.g. "webm" or "mp4".
    #[serde(default)]
    pub ext: String,

    /// Quality label, e.g. "1080p" or "720p60".
    #[serde(default)]
    pub format_note: Option<String>,

    #[serde(default)]
    pub vcodec: Option<String>,

    #[serde(default)]
    pub acodec: Option<String>,

    /// Audio bitrate in kbps.
    #[serde(default)]
    pub abr: Option<f64>,

    /// Total bitrate in kbps.
    #[serde(default)]
    pub tbr: Option<f64>,

    #[serde(default)]
    pub height: Option<u32>,

    #[serde(default)]
    pub fps: Option<f64>,
}

impl StreamDescriptor {
    fn has_codec(codec: Option<&str>) -> bool {
        codec.is_some_and(|c| c != "none" && !c.is_empty())
    }

    /// Audio-only variant: an audio codec and no video codec.
    pub fn is_audio_only(&self) -> bool {
        Self::has_codec(self.acodec.as_deref()) && !Self::has_codec(self.vcodec.as_deref())
    }

    /// Video-only variant: a video codec and no audio codec.
    pub fn is_video_only(&self) -> bool {
        Self::has_codec(self.vcodec.as_deref()) && !Self::has_codec(self.acodec.as_deref())
    }
}

/// All stream variants advertised for one video, in manifest order.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamManifest {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub formats: Vec<StreamDescriptor>,
}

impl StreamManifest {
    pub fn metadata(&self) -> VideoMetadata {
        VideoMetadata {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }

    pub fn audio_streams(&self) -> impl Iterator<Item = &StreamDescriptor> {
        self.formats.iter().filter(|f| f.is_audio_only())
    }

    pub fn video_streams(&self) -> impl Iterator<Item = &StreamDescriptor> {
        self.formats.iter().filter(|f| f.is_video_only())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFO_JSON: &str = r#"{
        "id": "jNQXAC9IVRw",
        "title": "Me at the zoo",
        "uploader": "jawed",
        "formats": [
            {"format_id": "249", "ext": "webm", "acodec": "opus", "vcodec": "none", "abr": 48.5},
            {"format_id": "140", "ext": "m4a", "acodec": "mp4a.40.2", "vcodec": "none", "abr": 129.4},
            {"format_id": "244", "ext": "webm", "format_note": "480p", "vcodec": "vp9", "acodec": "none", "height": 480, "fps": 30, "tbr": 430.1},
            {"format_id": "18", "ext": "mp4", "format_note": "360p", "vcodec": "avc1.42001E", "acodec": "mp4a.40.2", "height": 360}
        ]
    }"#;

    #[test]
    fn deserializes_info_dump() {
        let manifest: StreamManifest = serde_json::from_str(INFO_JSON).unwrap();

        assert_eq!(manifest.id, "jNQXAC9IVRw");
        assert_eq!(manifest.title, "Me at the zoo");
        assert_eq!(manifest.formats.len(), 4);
        assert_eq!(manifest.formats[2].format_note.as_deref(), Some("480p"));
        assert_eq!(manifest.formats[2].height, Some(480));
    }

    #[test]
    fn metadata_carries_id_and_title() {
        let manifest: StreamManifest = serde_json::from_str(INFO_JSON).unwrap();
        let metadata = manifest.metadata();

        assert_eq!(metadata.id, "jNQXAC9IVRw");
        assert_eq!(metadata.title, "Me at the zoo");
    }

    #[test]
    fn splits_audio_and_video_variants() {
        let manifest: StreamManifest = serde_json::from_str(INFO_JSON).unwrap();

        let audio: Vec<_> = manifest.audio_streams().map(|f| f.format_id.as_str()).collect();
        let video: Vec<_> = manifest.video_streams().map(|f| f.format_id.as_str()).collect();

        assert_eq!(audio, ["249", "140"]);
        // Progressive format 18 carries both codecs and belongs to neither set.
        assert_eq!(video, ["244"]);
    }

    #[test]
    fn missing_codec_field_counts_as_absent() {
        let descriptor = StreamDescriptor {
            format_id: "251".to_string(),
            acodec: Some("opus".to_string()),
            ..Default::default()
        };

        assert!(descriptor.is_audio_only());
        assert!(!descriptor.is_video_only());
    }
}
