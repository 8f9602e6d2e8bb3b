// src/core/sniff.rs

/// Accept a payload as audio if the server says so, or the bytes look like it.
pub fn is_audio(content_type: Option<&str>, body: &[u8]) -> bool {
    content_type.is_some_and(audio_content_type) || audio_signature(body)
}

fn audio_content_type(ct: &str) -> bool {
    let ct = ct.to_ascii_lowercase();
    ct.contains("audio") || ct.contains("mpeg")
}

/// ID3v2 tag, or a bare MPEG frame sync (11 set bits).
fn audio_signature(body: &[u8]) -> bool {
    match body {
        [b'I', b'D', b'3', ..] => true,
        [0xFF, b1, ..] => b1 & 0xE0 == 0xE0,
        _ => false,
    }
}
