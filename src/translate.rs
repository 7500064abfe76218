//! English → Portuguese title translation for catalog display.
//!
//! Lookup runs through progressively looser stages (exact, case-insensitive,
//! normalized, partial) against a curated title table and falls back to a
//! word-by-word pass. Both tables are slices, so iteration follows declaration
//! order and the first match always wins.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::normalize::{normalize, words};

/// Curated title table. Order matters: earlier entries win partial-match ties.
pub const TITLE_TABLE: &[(&str, &str)] = &[
    // Kept as published, or with an established local title
    ("Stuart Little", "Stuart Little"),
    ("The Wonderful Visit", "A Visita Maravilhosa"),
    ("Brood of the Witch-Queen", "A Ninhada da Rainha Bruxa"),
    ("The White People", "As Pessoas Brancas"),
    // Stephen King
    ("The Shining", "O Iluminado"),
    ("It", "It: A Coisa"),
    ("Pet Sematary", "Cemitério Maldito"),
    ("Pet Cemetery", "Cemitério Maldito"),
    ("Carrie", "Carrie, a Estranha"),
    ("The Stand", "A Dança da Morte"),
    ("Salem's Lot", "A Hora do Vampiro"),
    ("Misery", "Louca Obsessão"),
    ("The Dead Zone", "A Zona Morta"),
    ("Cujo", "Cujo"),
    ("Christine", "Christine"),
    ("Firestarter", "A Incendiária"),
    ("The Green Mile", "À Espera de um Milagre"),
    ("Bag of Bones", "Saco de Ossos"),
    ("The Dark Half", "Metade Sombria"),
    ("Needful Things", "Coisas Necessárias"),
    ("Gerald's Game", "Jogos Pérfidos"),
    ("Dolores Claiborne", "Dolores Claiborne"),
    ("The Girl Who Loved Tom Gordon", "A Menina Que Amava Tom Gordon"),
    ("Thinner", "O Ataque"),
    // Classic horror
    ("Dracula", "Drácula"),
    ("Frankenstein", "Frankenstein"),
    ("Frankenstein; or, The Modern Prometheus", "Frankenstein"),
    ("Frankenstein or The Modern Prometheus", "Frankenstein"),
    ("The Strange Case of Dr Jekyll and Mr Hyde", "O Médico e o Monstro"),
    ("The Strange Case of Dr. Jekyll and Mr. Hyde", "O Médico e o Monstro"),
    ("Strange Case of Dr Jekyll and Mr Hyde", "O Médico e o Monstro"),
    ("Dr Jekyll and Mr Hyde", "O Médico e o Monstro"),
    ("Jekyll and Hyde", "O Médico e o Monstro"),
    ("The Picture of Dorian Gray", "O Retrato de Dorian Gray"),
    ("The Invisible Man", "O Homem Invisível"),
    ("The Island of Doctor Moreau", "A Ilha do Dr. Moreau"),
    ("The Island of Dr Moreau", "A Ilha do Dr. Moreau"),
    ("The Turn of the Screw", "A Volta do Parafuso"),
    ("The Phantom of the Opera", "O Fantasma da Ópera"),
    ("The Monk", "O Monge"),
    ("The Castle of Otranto", "O Castelo de Otranto"),
    ("The Mysteries of Udolpho", "Os Mistérios de Udolpho"),
    ("The Legend of Sleepy Hollow", "A Lenda do Cavaleiro Sem Cabeça"),
    ("The Tell-Tale Heart", "O Coração Delator"),
    ("The Fall of the House of Usher", "A Queda da Casa de Usher"),
    ("The Raven", "O Corvo"),
    ("The Masque of the Red Death", "A Máscara da Morte Rubra"),
    // H.P. Lovecraft
    ("The Call of Cthulhu", "O Chamado de Cthulhu"),
    ("At the Mountains of Madness", "Nas Montanhas da Loucura"),
    ("The Shadow over Innsmouth", "A Sombra de Innsmouth"),
    ("The Dunwich Horror", "O Horror de Dunwich"),
    ("The Colour Out of Space", "A Cor que Caiu do Espaço"),
    ("The Whisperer in Darkness", "O Sussurrador nas Trevas"),
    ("The Shadow Out of Time", "A Sombra Vinda do Tempo"),
    ("The Dreams in the Witch House", "Os Sonhos na Casa da Bruxa"),
    ("The Rats in the Walls", "Os Ratos nas Paredes"),
    ("The Music of Erich Zann", "A Música de Erich Zann"),
    ("Herbert West–Reanimator", "Herbert West - Reanimador"),
    ("Reanimator", "Reanimador"),
    // Modern horror
    ("The Exorcist", "O Exorcista"),
    ("Rosemary's Baby", "O Bebê de Rosemary"),
    ("The Haunting of Hill House", "A Assombração da Casa da Colina"),
    ("I Am Legend", "Eu Sou a Lenda"),
    ("Psycho", "Psicose"),
    ("The Silence of the Lambs", "O Silêncio dos Inocentes"),
    ("American Psycho", "Psicopata Americano"),
    ("The Amityville Horror", "Horror em Amityville"),
    ("Hell House", "A Casa Infernal"),
    ("Ghost Story", "História de Fantasmas"),
    ("The Other", "O Outro"),
    ("The Shining Girls", "As Garotas Luminosas"),
    ("Mexican Gothic", "Gótico Mexicano"),
    ("The Ruins", "As Ruínas"),
    ("The Terror", "O Terror"),
    ("The Witching Hour", "A Hora das Bruxas"),
    ("The Historian", "A Historiadora"),
    // Other notable works
    ("House of Leaves", "Casa de Folhas"),
    ("Bird Box", "Caixa de Pássaros"),
    ("The Road", "A Estrada"),
    ("World War Z", "Guerra Mundial Z"),
    ("Interview with the Vampire", "Entrevista com o Vampiro"),
    ("Let the Right One In", "Deixe Ela Entrar"),
    ("The Ritual", "O Ritual"),
    ("The Troop", "A Tropa"),
    ("Heart-Shaped Box", "Caixa em Forma de Coração"),
    ("The Fisherman", "O Pescador"),
    ("The Cabin at the End of the World", "A Cabana no Fim do Mundo"),
    (
        "The Southern Book Club's Guide to Slaying Vampires",
        "O Guia do Clube do Livro Sulista para Matar Vampiros",
    ),
    ("Ring", "O Chamado"),
    ("Dark Matter", "Matéria Escura"),
    ("The Woman in Black", "A Mulher de Preto"),
    ("The Little Stranger", "O Pequeno Estranho"),
    ("We Have Always Lived in the Castle", "Sempre Vivemos no Castelo"),
    ("Rebecca", "Rebecca"),
    ("Coraline", "Coraline"),
    ("The Graveyard Book", "O Livro do Cemitério"),
    ("Something Wicked This Way Comes", "Este Lado das Trevas"),
    // Japanese horror
    ("Battle Royale", "Battle Royale"),
    ("Audition", "Audição"),
    ("Spiral", "Espiral"),
    // Zombies and post-apocalyptic
    ("The Girl with All the Gifts", "A Menina com Todos os Dons"),
    ("Zone One", "Zona Um"),
    ("The Passage", "A Passagem"),
    ("The Twelve", "Os Doze"),
    ("The City of Mirrors", "A Cidade dos Espelhos"),
    // Vampires and werewolves
    ("The Vampire Chronicles", "As Crônicas Vampirescas"),
    ("Fevre Dream", "Sonho Febril"),
    ("Those Across the River", "Aqueles do Outro Lado do Rio"),
    ("The Wolfman", "O Lobisomem"),
    // Gothic
    ("Wuthering Heights", "O Morro dos Ventos Uivantes"),
    ("Jane Eyre", "Jane Eyre"),
    ("The Woman in White", "A Mulher de Branco"),
    ("The Moonstone", "A Pedra da Lua"),
];

/// Word table for titles the curated table does not know. `the` maps to the
/// empty string and is dropped from the output.
pub const WORD_TABLE: &[(&str, &str)] = &[
    ("the", ""),
    ("a", "um/uma"),
    ("an", "um/uma"),
    ("of", "de"),
    ("and", "e"),
    ("or", "ou"),
    ("in", "em"),
    ("on", "sobre"),
    ("at", "em"),
    ("to", "para"),
    ("for", "para"),
    ("with", "com"),
    ("by", "por"),
    ("from", "de"),
    ("about", "sobre"),
    ("tales", "contos"),
    ("tale", "conto"),
    ("story", "história"),
    ("stories", "histórias"),
    ("book", "livro"),
    ("books", "livros"),
    ("night", "noite"),
    ("dark", "escuro"),
    ("darkness", "escuridão"),
    ("death", "morte"),
    ("dead", "morto"),
    ("ghost", "fantasma"),
    ("ghosts", "fantasmas"),
    ("witch", "bruxa"),
    ("witches", "bruxas"),
    ("monster", "monstro"),
    ("monsters", "monstros"),
    ("creature", "criatura"),
    ("house", "casa"),
    ("castle", "castelo"),
    ("blood", "sangue"),
    ("shadow", "sombra"),
    ("shadows", "sombras"),
    ("curse", "maldição"),
    ("horror", "horror"),
    ("terror", "terror"),
    ("nightmare", "pesadelo"),
    ("haunted", "assombrado"),
    ("haunting", "assombração"),
];

/// Minimum word length for both sides of a partial match.
const PARTIAL_MIN_WORD_LEN: usize = 3;
/// Share of the shorter side's words that must appear on the other side.
const PARTIAL_SHARED_RATIO: f64 = 0.6;

static DEFAULT_TRANSLATOR: Lazy<TitleTranslator> =
    Lazy::new(|| TitleTranslator::new(TITLE_TABLE, WORD_TABLE));

/// Translate a title with the built-in tables.
pub fn translate(english_title: &str) -> String {
    DEFAULT_TRANSLATOR.translate(english_title)
}

struct TitleEntry {
    english: &'static str,
    localized: &'static str,
    normalized: String,
}

/// Title translator over a fixed title table and word table.
pub struct TitleTranslator {
    titles: Vec<TitleEntry>,
    words: HashMap<&'static str, &'static str>,
}

impl TitleTranslator {
    pub fn new(
        titles: &'static [(&'static str, &'static str)],
        words: &'static [(&'static str, &'static str)],
    ) -> Self {
        let titles = titles
            .iter()
            .map(|(english, localized)| TitleEntry {
                english,
                localized,
                normalized: normalize(english),
            })
            .collect();
        Self { titles, words: words.iter().copied().collect() }
    }

    /// Translate `english_title`; first matching stage wins.
    pub fn translate(&self, english_title: &str) -> String {
        if let Some(hit) = self.titles.iter().find(|e| e.english == english_title) {
            return hit.localized.to_string();
        }

        let lower = english_title.to_lowercase();
        if let Some(hit) = self.titles.iter().find(|e| e.english.to_lowercase() == lower) {
            return hit.localized.to_string();
        }

        let normalized = normalize(english_title);
        if !normalized.is_empty() {
            if let Some(hit) = self.titles.iter().find(|e| e.normalized == normalized) {
                return hit.localized.to_string();
            }
            if let Some(hit) = self.partial_match(&normalized) {
                return hit.to_string();
            }
        }

        self.translate_words(english_title)
    }

    fn partial_match(&self, normalized: &str) -> Option<&'static str> {
        let input_words = words(normalized);
        let eligible = input_words.len() > 1
            && input_words.iter().all(|w| w.chars().count() >= PARTIAL_MIN_WORD_LEN);
        if !eligible {
            return None;
        }

        self.titles.iter().find_map(|entry| {
            let key = entry.normalized.as_str();
            let key_words = words(key);
            match key_words.as_slice() {
                [] => return None,
                [only] if only.chars().count() < PARTIAL_MIN_WORD_LEN => return None,
                _ => {}
            }
            if !(normalized.contains(key) || key.contains(normalized)) {
                return None;
            }
            let shared = input_words
                .iter()
                .filter(|w| key_words.contains(w))
                .count()
                .max(key_words.iter().filter(|w| input_words.contains(w)).count());
            let shorter = input_words.len().min(key_words.len());
            let required = (shorter as f64 * PARTIAL_SHARED_RATIO).ceil() as usize;
            (shared >= required).then_some(entry.localized)
        })
    }

    /// Word-by-word fallback. Unknown words pass through untouched.
    pub fn translate_words(&self, title: &str) -> String {
        title
            .split_whitespace()
            .filter_map(|word| {
                let key: String = word
                    .chars()
                    .filter(|c| c.is_alphanumeric() || *c == '_')
                    .collect::<String>()
                    .to_lowercase();
                match self.words.get(key.as_str()) {
                    Some(t) if t.is_empty() => None,
                    Some(t) => Some(t.to_string()),
                    None => Some(word.to_string()),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TitleTranslator {
    fn default() -> Self {
        Self::new(TITLE_TABLE, WORD_TABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup() {
        assert_eq!(translate("The Shining"), "O Iluminado");
        assert_eq!(translate("It"), "It: A Coisa");
    }

    #[test]
    fn case_insensitive_lookup() {
        assert_eq!(translate("THE EXORCIST"), "O Exorcista");
        assert_eq!(translate("pet sematary"), "Cemitério Maldito");
    }

    #[test]
    fn normalized_lookup_ignores_punctuation_and_honorifics() {
        assert_eq!(translate("Strange Case of Dr. Jekyll and Mr. Hyde!"), "O Médico e o Monstro");
        assert_eq!(translate("Salems Lot"), "Salems Lot");
        assert_eq!(translate("salem's   lot!"), "A Hora do Vampiro");
    }

    #[test]
    fn partial_lookup_on_compound_titles() {
        assert_eq!(translate("The Dunwich Horror and Others"), "O Horror de Dunwich");
    }

    #[test]
    fn one_letter_token_blocks_partial_lookup() {
        assert_eq!(
            translate("Dracula's Guest and Other Weird Stories"),
            "Dracula's Guest e Other Weird histórias"
        );
    }

    #[test]
    fn partial_lookup_skips_short_words() {
        // "of" is shorter than three letters, so no partial stage; word fallback applies.
        assert_eq!(translate("Ghost of Hill House"), "fantasma de Hill casa");
    }

    #[test]
    fn short_single_word_key_never_wins_partial_lookup() {
        static TITLES: &[(&str, &str)] = &[
            ("It", "It: A Coisa"),
            ("Bandit Queen Chronicles", "Crônicas da Rainha Bandida"),
        ];
        let t = TitleTranslator::new(TITLES, &[]);
        assert_eq!(t.translate("Bandit Queen"), "Crônicas da Rainha Bandida");
        assert_eq!(t.translate("Bandit Tales"), "Bandit Tales");
        assert_eq!(t.translate("it"), "It: A Coisa");
    }

    #[test]
    fn partial_lookup_requires_shared_words() {
        // "ring" is a substring of "string" but not a shared word.
        assert_eq!(translate("Stringed Shadows"), "Stringed sombras");
    }

    #[test]
    fn word_fallback_drops_the_article() {
        assert_eq!(translate("Some Unknown Horror Tale"), "Some Unknown horror conto");
        assert_eq!(translate("The Night Witch"), "noite bruxa");
        assert_eq!(translate("The"), "");
    }

    #[test]
    fn unknown_words_pass_through() {
        assert_eq!(translate("Zyzzyva Quux"), "Zyzzyva Quux");
        assert_eq!(translate(""), "");
    }

    #[test]
    fn custom_tables_follow_declaration_order() {
        static TITLES: &[(&str, &str)] = &[
            ("Dark Forest Tales", "first"),
            ("Dark Forest", "second"),
        ];
        let t = TitleTranslator::new(TITLES, &[]);
        assert_eq!(t.translate("Dark Forest Tales Collected"), "first");
        assert_eq!(t.translate("dark forest"), "second");
    }
}
