//! Static PT/EN/ES keyword tables shared by every extractor.
//!
//! Tables hold lowercase literals; matchers built from them are compiled
//! case-insensitive, whole-word, and longest-alternative first so that
//! "live streams" wins over "live" at the same position.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{AgeRange, Platform, SegmentKey};

pub const NUMBER_WORDS: &[(&str, u64)] = &[
    // pt
    ("um", 1),
    ("uma", 1),
    ("dois", 2),
    ("duas", 2),
    ("três", 3),
    ("tres", 3),
    ("quatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("sete", 7),
    ("oito", 8),
    ("nove", 9),
    ("dez", 10),
    ("onze", 11),
    ("doze", 12),
    ("treze", 13),
    ("catorze", 14),
    ("quatorze", 14),
    ("quinze", 15),
    ("dezesseis", 16),
    ("dezasseis", 16),
    ("dezessete", 17),
    ("dezoito", 18),
    ("dezenove", 19),
    ("vinte", 20),
    ("trinta", 30),
    ("quarenta", 40),
    ("cinquenta", 50),
    ("cem", 100),
    // en
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("hundred", 100),
    // es
    ("uno", 1),
    ("una", 1),
    ("dos", 2),
    ("cuatro", 4),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
    ("diez", 10),
    ("once", 11),
    ("doce", 12),
    ("trece", 13),
    ("catorce", 14),
    ("quince", 15),
    ("dieciséis", 16),
    ("dieciseis", 16),
    ("diecisiete", 17),
    ("dieciocho", 18),
    ("diecinueve", 19),
    ("veinte", 20),
    ("treinta", 30),
    ("cuarenta", 40),
    ("cincuenta", 50),
    ("cien", 100),
];

/// Largest number word accepted as a live count.
pub const MAX_COUNT_WORD: u64 = 20;

/// Largest live count a brief may resolve to; anything above is unreadable.
pub const MAX_LIVES: u32 = 50;

/// Nouns that anchor a live-slot count ("3 lives", "five creators").
pub const LIVE_KEYWORDS: &[&str] = &[
    "live",
    "lives",
    "live stream",
    "live streams",
    "livestream",
    "livestreams",
    "live shop",
    "live shops",
    "live shopping",
    "live shoppings",
    "stream",
    "streams",
    "transmissão",
    "transmissões",
    "transmissao",
    "transmissoes",
    "sessão ao vivo",
    "sessões ao vivo",
    "sessao ao vivo",
    "sessoes ao vivo",
    "transmisión",
    "transmisiones",
    "transmision",
    "sesión en vivo",
    "sesiones en vivo",
    "directo",
    "directos",
    "creator",
    "creators",
    "criador",
    "criadores",
    "criadora",
    "criadoras",
    "creador",
    "creadores",
    "influencer",
    "influencers",
    "influenciador",
    "influenciadores",
    "influenciadora",
    "influenciadoras",
    "perfil",
    "perfis",
    "perfiles",
    "profile",
    "profiles",
];

/// Nouns naming the people behind a slot, for "creators of 100k".
pub const CREATOR_KEYWORDS: &[&str] = &[
    "creator",
    "creators",
    "criador",
    "criadores",
    "criadora",
    "criadoras",
    "creador",
    "creadores",
    "influencer",
    "influencers",
    "influenciador",
    "influenciadores",
    "influenciadora",
    "influenciadoras",
    "perfil",
    "perfis",
    "perfiles",
    "profile",
    "profiles",
];

pub const FOLLOWER_WORDS: &[&str] = &[
    "follower",
    "followers",
    "seguidor",
    "seguidores",
    "seguidora",
    "seguidoras",
    "subscriber",
    "subscribers",
    "inscrito",
    "inscritos",
    "suscriptor",
    "suscriptores",
];

/// Broadcast qualifiers: one value applies to every slot.
pub const EACH_WORDS: &[&str] = &["each", "every", "apiece", "cada"];

/// Magnitude suffixes understood after a digit run. Longest first.
pub const UNIT_PATTERN: &str =
    r"(?:milh(?:ão|ao|ões|oes)|millions?|mill(?:ón|on|ones)|thousands?|mil|mi|m|k)";

/// Digits with optional `.`/`,` groups and an optional magnitude suffix.
pub static NUMBER_TOKEN: LazyLock<String> =
    LazyLock::new(|| format!(r"\d+(?:[.,]\d+)*(?:\s*{UNIT_PATTERN}\b)?"));

/// Labels introducing an explicit free-text segment ("nicho: pets").
pub const SEGMENT_LABEL_WORDS: &[&str] = &[
    "segmento",
    "segment",
    "nicho",
    "niche",
    "categoria",
    "categoría",
    "category",
    "vertical",
];

pub const SEGMENT_TAXONOMY: &[(SegmentKey, &[&str])] = &[
    (
        SegmentKey::BeautyMakeup,
        &[
            "beleza",
            "beauty",
            "belleza",
            "maquiagem",
            "maquillaje",
            "makeup",
            "make-up",
            "make up",
            "cosméticos",
            "cosmeticos",
            "cosmetics",
            "skincare",
            "skin care",
        ],
    ),
    (
        SegmentKey::FashionStyle,
        &[
            "moda",
            "fashion",
            "style",
            "roupa",
            "roupas",
            "ropa",
            "clothing",
            "outfit",
            "outfits",
            "vestuário",
            "vestuario",
        ],
    ),
    (
        SegmentKey::FitnessSports,
        &[
            "fitness",
            "esporte",
            "esportes",
            "sport",
            "sports",
            "deporte",
            "deportes",
            "academia",
            "gym",
            "treino",
            "treinos",
            "workout",
            "workouts",
            "entrenamiento",
            "crossfit",
            "running",
            "corrida",
        ],
    ),
    (
        SegmentKey::Lifestyle,
        &[
            "lifestyle",
            "estilo de vida",
            "vlog",
            "vlogs",
            "rotina",
            "routine",
            "rutina",
            "viagem",
            "viagens",
            "travel",
            "viaje",
            "viajes",
        ],
    ),
    (
        SegmentKey::TechGadgets,
        &[
            "tecnologia",
            "tecnología",
            "technology",
            "tech",
            "gadget",
            "gadgets",
            "eletrônicos",
            "eletronicos",
            "electronics",
            "electrónica",
            "electronica",
            "smartphone",
            "smartphones",
        ],
    ),
    (
        SegmentKey::GamingEsports,
        &[
            "game",
            "games",
            "gaming",
            "gamer",
            "gamers",
            "jogos",
            "juegos",
            "videogame",
            "videogames",
            "videojuegos",
            "esports",
            "e-sports",
        ],
    ),
    (
        SegmentKey::HomeDecor,
        &[
            "casa",
            "home",
            "hogar",
            "decoração",
            "decoracao",
            "decor",
            "decoration",
            "decoración",
            "decoracion",
            "interiores",
            "interior design",
        ],
    ),
    (
        SegmentKey::FoodCooking,
        &[
            "culinária",
            "culinaria",
            "gastronomia",
            "gastronomía",
            "food",
            "comida",
            "cooking",
            "cozinha",
            "cocina",
            "receitas",
            "recetas",
            "recipes",
            "foodie",
        ],
    ),
    (
        SegmentKey::MotherBabyFamily,
        &[
            "maternidade",
            "maternidad",
            "motherhood",
            "mães",
            "maes",
            "mamães",
            "mom",
            "moms",
            "mamás",
            "bebê",
            "bebês",
            "bebe",
            "bebés",
            "baby",
            "babies",
            "família",
            "familia",
            "family",
            "parenting",
            "infantil",
            "kids",
        ],
    ),
    (
        SegmentKey::BusinessEducation,
        &[
            "negócios",
            "negocios",
            "business",
            "empreendedorismo",
            "emprendimiento",
            "entrepreneurship",
            "educação",
            "educacao",
            "educación",
            "educacion",
            "education",
            "finanças",
            "financas",
            "finanzas",
            "finance",
            "carreira",
            "career",
        ],
    ),
    (
        SegmentKey::HealthWellness,
        &[
            "saúde",
            "saude",
            "salud",
            "health",
            "bem-estar",
            "bienestar",
            "wellness",
            "wellbeing",
            "well-being",
            "nutrição",
            "nutricao",
            "nutrición",
            "nutrition",
            "mindfulness",
            "meditação",
            "meditation",
            "yoga",
        ],
    ),
];

pub const ORDINALS: &[(&str, usize)] = &[
    ("first", 1),
    ("1st", 1),
    ("primeira", 1),
    ("primeiro", 1),
    ("primera", 1),
    ("primero", 1),
    ("1ª", 1),
    ("1º", 1),
    ("second", 2),
    ("2nd", 2),
    ("segunda", 2),
    ("segundo", 2),
    ("2ª", 2),
    ("2º", 2),
    ("third", 3),
    ("3rd", 3),
    ("terceira", 3),
    ("terceiro", 3),
    ("tercera", 3),
    ("tercero", 3),
    ("3ª", 3),
    ("3º", 3),
    ("fourth", 4),
    ("4th", 4),
    ("quarta", 4),
    ("quarto", 4),
    ("cuarta", 4),
    ("cuarto", 4),
    ("4ª", 4),
    ("4º", 4),
    ("fifth", 5),
    ("5th", 5),
    ("quinta", 5),
    ("quinto", 5),
    ("5ª", 5),
    ("5º", 5),
];

pub const PLATFORM_KEYWORDS: &[(Platform, &[&str])] = &[
    (Platform::Instagram, &["instagram", "insta", "ig", "reels"]),
    (Platform::TikTok, &["tiktok", "tik tok", "tik-tok"]),
    (Platform::YouTube, &["youtube", "you tube", "yt", "shorts"]),
    (Platform::Twitter, &["twitter", "tweet", "tweets"]),
];

pub const AGE_KEYWORDS: &[(AgeRange, &[&str])] = &[
    (
        AgeRange::Young,
        &[
            "jovem",
            "jovens",
            "young",
            "youth",
            "joven",
            "jóvenes",
            "jovenes",
            "gen z",
            "geração z",
            "geracao z",
            "generación z",
            "adolescentes",
            "teen",
            "teens",
            "teenagers",
            "universitários",
            "universitarios",
            "college students",
        ],
    ),
    (
        AgeRange::Adult,
        &[
            "adulto",
            "adultos",
            "adulta",
            "adultas",
            "adult",
            "adults",
            "millennial",
            "millennials",
            "profissionais",
            "professionals",
            "profesionales",
        ],
    ),
    (
        AgeRange::Mature,
        &[
            "maduro",
            "maduros",
            "madura",
            "maduras",
            "mature",
            "senior",
            "seniors",
            "terceira idade",
            "tercera edad",
            "mais velhos",
            "older",
            "boomers",
        ],
    ),
];

/// Regex alternation of `words`, longest first, with literal spaces relaxed
/// to `\s+`.
pub fn alternation<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut sorted: Vec<&str> = words.into_iter().collect();
    sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    sorted.dedup();
    sorted
        .iter()
        .map(|w| regex::escape(w).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

/// Case-insensitive whole-word matcher for any of `words`.
pub fn whole_word_regex(words: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(words.iter().copied())))
        .expect("valid regex")
}

pub fn number_word_value(word: &str) -> Option<u64> {
    let lower = word.to_lowercase();
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == lower)
        .map(|(_, v)| *v)
}

pub fn ordinal_value(word: &str) -> Option<usize> {
    let lower = word.to_lowercase();
    ORDINALS
        .iter()
        .find(|(w, _)| *w == lower)
        .map(|(_, v)| *v)
}

pub static SEGMENT_MATCHERS: LazyLock<Vec<(SegmentKey, Regex)>> = LazyLock::new(|| {
    SEGMENT_TAXONOMY
        .iter()
        .map(|(key, words)| (*key, whole_word_regex(words)))
        .collect()
});

pub static PLATFORM_MATCHERS: LazyLock<Vec<(Platform, Regex)>> = LazyLock::new(|| {
    PLATFORM_KEYWORDS
        .iter()
        .map(|(platform, words)| (*platform, whole_word_regex(words)))
        .collect()
});

pub static AGE_MATCHERS: LazyLock<Vec<(AgeRange, Regex)>> = LazyLock::new(|| {
    AGE_KEYWORDS
        .iter()
        .map(|(age, words)| (*age, whole_word_regex(words)))
        .collect()
});

pub static EACH_RE: LazyLock<Regex> = LazyLock::new(|| whole_word_regex(EACH_WORDS));

/// Keys of every matcher that hits `text`, ordered by the position of their
/// earliest hit. Ties keep table order.
pub fn ordered_hits<K: Copy>(text: &str, matchers: &[(K, Regex)]) -> Vec<K> {
    let mut hits: Vec<(usize, usize, K)> = matchers
        .iter()
        .enumerate()
        .filter_map(|(rank, (key, re))| re.find(text).map(|m| (m.start(), rank, *key)))
        .collect();
    hits.sort_by_key(|(start, rank, _)| (*start, *rank));
    hits.into_iter().map(|(_, _, key)| key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternation_puts_longest_first() {
        let alt = alternation(["live", "live streams", "lives"]);
        assert_eq!(alt, r"live\s+streams|lives|live");
    }

    #[test]
    fn number_words_cover_three_languages() {
        assert_eq!(number_word_value("Três"), Some(3));
        assert_eq!(number_word_value("three"), Some(3));
        assert_eq!(number_word_value("veinte"), Some(20));
        assert_eq!(number_word_value("dieciséis"), Some(16));
        assert_eq!(number_word_value("lots"), None);
    }

    #[test]
    fn ordinals_map_to_slot_index() {
        assert_eq!(ordinal_value("Segunda"), Some(2));
        assert_eq!(ordinal_value("3rd"), Some(3));
        assert_eq!(ordinal_value("quinto"), Some(5));
        assert_eq!(ordinal_value("sixth"), None);
    }

    #[test]
    fn whole_word_regex_respects_boundaries() {
        let re = whole_word_regex(&["casa", "game"]);
        assert!(re.is_match("decoração para Casa"));
        assert!(!re.is_match("casamento"));
        assert!(!re.is_match("gameplay"));
    }

    #[test]
    fn ordered_hits_follow_first_appearance() {
        let hits = ordered_hits("gaming first, then beauty and more games", &SEGMENT_MATCHERS);
        assert_eq!(hits, vec![SegmentKey::GamingEsports, SegmentKey::BeautyMakeup]);
    }

    #[test]
    fn every_taxonomy_key_is_a_real_bucket() {
        assert_eq!(SEGMENT_TAXONOMY.len(), SegmentKey::ALL.len() - 1);
        assert!(SEGMENT_TAXONOMY.iter().all(|(key, _)| *key != SegmentKey::Other));
    }
}
