// src/config/sources.rs
//
// Remote audio hosts, in priority order. Each entry is a pure
// (chapter, verse) -> URL generator.

#[derive(Clone, Copy)]
pub struct Candidate {
    pub name: &'static str,
    pub url: fn(u32, u32) -> String,
}

impl Candidate {
    pub fn url_for(&self, chapter: u32, verse: u32) -> String {
        (self.url)(chapter, verse)
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate").field("name", &self.name).finish()
    }
}

pub const DEFAULT_SOURCES: &[Candidate] = &[
    Candidate { name: "bhagavadgita.io", url: bhagavadgita_io },
    Candidate { name: "gitasupersite", url: gita_supersite },
    Candidate { name: "iskcondesiretree", url: iskcon_desire_tree },
    Candidate { name: "holy-bhagavad-gita", url: holy_bhagavad_gita },
];

fn bhagavadgita_io(ch: u32, vr: u32) -> String {
    format!("https://bhagavadgita.io/static/audio/{ch:02}_{vr:03}.mp3")
}

fn gita_supersite(ch: u32, vr: u32) -> String {
    format!("https://www.gitasupersite.iitk.ac.in/srimad/sloka/audio/{ch}/{vr}.mp3")
}

fn iskcon_desire_tree(ch: u32, vr: u32) -> String {
    format!(
        "https://media.blubrry.com/bhagavad_gita/audio.iskcondesiretree.com/\
         01_-_Srila_Prabhupada_Class/01_-_Bhagavad-Gita/Bhagavad-Gita_{ch:02}.{vr:02}.mp3"
    )
}

// Site pads the chapter with a literal '0' (so chapter 12 becomes "012").
fn holy_bhagavad_gita(ch: u32, vr: u32) -> String {
    format!("https://www.holy-bhagavad-gita.org/public/audio/0{ch}/0{ch}{vr:02}.mp3")
}
