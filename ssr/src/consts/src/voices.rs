/// One selectable TTS voice. The options panel renders whatever catalog it
/// is handed; it never interprets the ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoiceDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

const fn voice(id: &'static str, label: &'static str) -> VoiceDescriptor {
    VoiceDescriptor { id, label }
}

/// TikTok TTS voice catalog understood by the backend.
pub const VOICES: &[VoiceDescriptor] = &[
    voice("en_us_001", "English US - Female"),
    voice("en_us_006", "English US - Male 1"),
    voice("en_us_007", "English US - Male 2"),
    voice("en_us_009", "English US - Male 3"),
    voice("en_us_010", "English US - Male 4"),
    voice("en_uk_001", "English UK - Male 1"),
    voice("en_uk_003", "English UK - Male 2"),
    voice("en_au_001", "English AU - Female"),
    voice("en_au_002", "English AU - Male"),
    voice("fr_001", "French - Male 1"),
    voice("fr_002", "French - Male 2"),
    voice("de_001", "German - Female"),
    voice("de_002", "German - Male"),
    voice("es_002", "Spanish - Male"),
    voice("es_mx_002", "Spanish MX - Male"),
    voice("br_001", "Portuguese BR - Female 1"),
    voice("br_003", "Portuguese BR - Female 2"),
    voice("br_005", "Portuguese BR - Male"),
    voice("id_001", "Indonesian - Female"),
    voice("jp_001", "Japanese - Female 1"),
    voice("jp_006", "Japanese - Male"),
    voice("kr_002", "Korean - Male 1"),
    voice("kr_003", "Korean - Female"),
    voice("en_us_ghostface", "Ghost Face"),
    voice("en_us_chewbacca", "Chewbacca"),
    voice("en_us_c3po", "C3PO"),
    voice("en_us_stitch", "Stitch"),
    voice("en_us_stormtrooper", "Stormtrooper"),
    voice("en_us_rocket", "Rocket"),
];
