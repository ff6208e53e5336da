//! The five-circle dataset compiled into the crate.

use crate::model::{Circle, CircleId, CircleTheme, Meter, PoetryExample};

pub(super) fn circles() -> Vec<Circle> {
    vec![
        mixed_circle(),
        pure_circle(),
        contracted_circle(),
        accordant_circle(),
        consonant_circle(),
    ]
}

fn units(symbols: &[&str]) -> Vec<String> {
    symbols.iter().map(|s| s.to_string()).collect()
}

fn theme(primary: &str, accent: &str, gradient: [&str; 2], border: &str) -> CircleTheme {
    CircleTheme {
        primary_color: primary.to_string(),
        accent_color: accent.to_string(),
        background_gradient: [gradient[0].to_string(), gradient[1].to_string()],
        border_color: border.to_string(),
    }
}

fn example(text: &str, poet: &str, translation: &str, era: &str) -> PoetryExample {
    PoetryExample {
        text: text.to_string(),
        poet: poet.to_string(),
        translation: Some(translation.to_string()),
        era: era.to_string(),
    }
}

/// Fields shared by every meter literal below, in declaration order.
struct MeterDef<'a> {
    id: &'a str,
    name: &'a str,
    transliteration: &'a str,
    offset: usize,
    groups: &'a [usize],
    pattern: &'a str,
    description: &'a str,
    usage: &'a str,
}

fn meter(circle_id: CircleId, def: MeterDef<'_>, examples: Vec<PoetryExample>) -> Meter {
    Meter {
        id: def.id.to_string(),
        name: def.name.to_string(),
        name_transliteration: def.transliteration.to_string(),
        description: def.description.to_string(),
        circle_id,
        start_offset: def.offset,
        parsing_instructions: def.groups.to_vec(),
        pattern_transliteration: def.pattern.to_string(),
        historical_usage: def.usage.to_string(),
        famous_examples: examples,
    }
}

fn mixed_circle() -> Circle {
    let id = CircleId::Mixed;
    Circle {
        id,
        name: "دائرة المختلف".to_string(),
        name_transliteration: "al-Da'ira al-Mukhtalita".to_string(),
        description: "The Mixed Circle - the first and foundational circle containing the most commonly used meters in Arabic poetry".to_string(),
        atomic_sequence: units(&["0//", "0/", "0//", "0/", "0/", "0//", "0/", "0//", "0/", "0/"]),
        base_sequence_length: 10,
        meters: vec![
            meter(
                id,
                MeterDef {
                    id: "al-tawil",
                    name: "البحر الطويل",
                    transliteration: "al-Bahr al-Tawil",
                    offset: 0,
                    groups: &[2, 3, 2, 3],
                    pattern: "faʿūlun mafāʿīlun faʿūlun mafāʿīlun",
                    description: "One of the most common meters, often used for praise, satire, and themes of pride.",
                    usage: "Predominantly used in pre-Islamic poetry and the Mu'allaqa. Favored for heroic and panegyric poetry.",
                },
                vec![example(
                    "أَرانِي إِلاّ مُزيدَ الهوى * وَأَنكَ إِلاّ مُهانٌ كَئِيبُ",
                    "امرؤ القيس",
                    "I see myself increasing only in love, and you only as a dishonored, sorrowful one",
                    "Pre-Islamic",
                )],
            ),
            meter(
                id,
                MeterDef {
                    id: "al-madid",
                    name: "البحر المديد",
                    transliteration: "al-Bahr al-Madid",
                    offset: 1,
                    groups: &[3, 2, 3, 2],
                    pattern: "fāʿilātun fāʿilun fāʿilātun fāʿilun",
                    description: "A lighter meter, suitable for descriptive poetry and expressions of personal feeling.",
                    usage: "Often used in its shorter, 3-foot form. Popular for elegiac and contemplative poetry.",
                },
                vec![example(
                    "يا ليتَ الشبابَ يعودُ يوماً * فأخبِرَهُ بما فعلَ المَشيبُ",
                    "أبو العتاهية",
                    "If only youth could return one day, so I could tell it what old age has done",
                    "Abbasid",
                )],
            ),
            meter(
                id,
                MeterDef {
                    id: "al-basit",
                    name: "البحر البسيط",
                    transliteration: "al-Bahr al-Basit",
                    offset: 3,
                    groups: &[3, 2, 3, 2],
                    pattern: "mustafʿilun fāʿilun mustafʿilun fāʿilun",
                    description: "A versatile and smooth-flowing meter, used for a wide range of narrative and descriptive topics.",
                    usage: "Highly versatile, used across many genres from narrative to didactic poetry.",
                },
                vec![example(
                    "إن الكريمَ إذا تمكن من أذى * لم يبق في قلبِه له أثرُ",
                    "البحتري",
                    "When the generous one is able to cause harm, no trace of it remains in his heart",
                    "Abbasid",
                )],
            ),
        ],
        visual_theme: theme("#FBBF24", "#F59E0B", ["#FEF3C7", "#FCD34D"], "#D97706"),
        order: 1,
    }
}

fn pure_circle() -> Circle {
    let id = CircleId::Pure;
    Circle {
        id,
        name: "دائرة المؤتلف".to_string(),
        name_transliteration: "al-Da'ira al-Mujtaliba".to_string(),
        description: "The Pure Circle - containing meters with harmonious, complete prosodic patterns".to_string(),
        atomic_sequence: units(&[
            "0//", "0///", "0//", "0///", "0//", "0///", "0//", "0///", "0//", "0///", "0//", "0///",
        ]),
        base_sequence_length: 9,
        meters: vec![
            meter(
                id,
                MeterDef {
                    id: "al-wafir",
                    name: "البحر الوافر",
                    transliteration: "al-Bahr al-Wafir",
                    offset: 0,
                    groups: &[2, 2, 2],
                    pattern: "mufāʿilatun mufāʿilatun mufāʿilatun",
                    description: "A flowing meter with compound feet, creating a sense of abundance and completeness.",
                    usage: "Popular in classical Arabic poetry, especially for philosophical and contemplative themes.",
                },
                vec![
                    example(
                        "مُباركٌ الاسمُ أَغَرُّ اللَقَبْ * كَريمُ الجَرثومَةِ شَريفُ النَسَبْ",
                        "أحمد شوقي",
                        "Blessed is the name, glorious the title, noble the origin, honorable the lineage",
                        "Modern",
                    ),
                    example(
                        "يا مَن يَعِزُّ عَلَيْنَا أَنْ نُفَارِقَهُمْ * وِجْدَانُنَا كُلَّ شَيْءٍ بَعْدَكُمْ عَدَمُ",
                        "ابن زيدون",
                        "O those whom it grieves us to part from, our consciousness after you is nothingness",
                        "Andalusian",
                    ),
                ],
            ),
            meter(
                id,
                MeterDef {
                    id: "al-kamil",
                    name: "البحر الكامل",
                    transliteration: "al-Bahr al-Kamil",
                    offset: 1,
                    groups: &[2, 2, 2],
                    pattern: "mutafāʿilun mutafāʿilun mutafāʿilun",
                    description: "The \"Complete\" meter, known for its perfect symmetry and musical quality.",
                    usage: "Extremely popular across all periods, used for panegyric, elegiac, and narrative poetry.",
                },
                vec![
                    example(
                        "بانَتْ سُعادُ فَقَلبي اليَومَ مَتبولُ * مُتَيَّمٌ إِثرَها لَم يُفْدَ مَكبولُ",
                        "كعب بن زهير",
                        "Su'ad has departed, and my heart today is afflicted, captivated by her, unfree and shackled",
                        "Early Islamic",
                    ),
                    example(
                        "أَلا هُبِّي بِصَحْنِكِ فَاصْبَحِينَا * وَلا تُبْقِي خُمُورَ الأَنْدَرِينَا",
                        "الأعشى",
                        "Come, arise with your cup and give us to drink, do not leave the wines of the Andarīn",
                        "Pre-Islamic",
                    ),
                ],
            ),
        ],
        visual_theme: theme("#3B82F6", "#1D4ED8", ["#DBEAFE", "#93C5FD"], "#1E40AF"),
        order: 2,
    }
}

fn contracted_circle() -> Circle {
    let id = CircleId::Contracted;
    Circle {
        id,
        name: "دائرة المجتلب".to_string(),
        name_transliteration: "da'irat al-Mujtathab".to_string(),
        description: "دائرة المجتلب - تتكون من تفعيلات سباعية متكررة (مفاعيلن، مستفعلن، فاعلاتن)".to_string(),
        atomic_sequence: units(&["0//", "0/", "0/", "0//", "0/", "0/", "0//", "0/", "0/"]),
        base_sequence_length: 9,
        meters: vec![
            meter(
                id,
                MeterDef {
                    id: "al-hazaj",
                    name: "البحر الهزج",
                    transliteration: "al-Bahr al-Hazaj",
                    offset: 0,
                    groups: &[3, 3, 3],
                    pattern: "mafāʿīlun mafāʿīlun mafāʿīlun",
                    description: "A rhythmic meter with a quick, bouncing cadence, often used for light verse.",
                    usage: "Popular for satirical and humorous poetry, also used in folk songs and children's verse.",
                },
                vec![example(
                    "صَفَحنا عَن بَني ذُهلٍ * وَقُلنا القَومُ إِخوانُ",
                    "قيس بن الملوح (مجنون ليلى)",
                    "We forgave the Banu Dhuhl, and said: \"The people are brothers.\"",
                    "Umayyad",
                )],
            ),
            meter(
                id,
                MeterDef {
                    id: "al-rajaz",
                    name: "البحر الرجز",
                    transliteration: "al-Bahr al-Rajaz",
                    offset: 1,
                    groups: &[3, 3, 3],
                    pattern: "mustafʿilun mustafʿilun mustafʿilun",
                    description: "The most flexible meter in Arabic poetry, allowing many variations and perfect for didactic verse.",
                    usage: "Extremely versatile, used for epic poetry, religious verse, and pedagogical content.",
                },
                vec![example(
                    "ما هاجَ أَحزاناً وَشَجواً قَد شَجا * تَأمُّلُ العَينِ بِأَعناقِ الدُمى",
                    "الفرزدق",
                    "What stirred sorrows and grief that was already grieving? The eye contemplating the necks of the statues.",
                    "Umayyad",
                )],
            ),
            meter(
                id,
                MeterDef {
                    id: "al-ramal",
                    name: "البحر الرمل",
                    transliteration: "al-Bahr al-Ramal",
                    offset: 2,
                    groups: &[3, 3, 3],
                    pattern: "fāʿilātun fāʿilātun fāʿilātun",
                    description: "A graceful, flowing meter that creates a gentle, undulating rhythm like sand dunes.",
                    usage: "Favored for love poetry and nature descriptions, popular in Andalusian poetry.",
                },
                vec![example(
                    "أَضحى التَنائي بَديلاً مِن تَدانينا * وَنابَ عَن طيبِ لُقيانا تَجافينا",
                    "ابن زيدون",
                    "Distance has become a substitute for our nearness, and separation has replaced the sweetness of our meeting.",
                    "Andalusian",
                )],
            ),
        ],
        visual_theme: theme("#10B981", "#059669", ["#D1FAE5", "#6EE7B7"], "#047857"),
        order: 3,
    }
}

fn accordant_circle() -> Circle {
    let id = CircleId::Accordant;
    Circle {
        id,
        name: "دائرة المشتبه".to_string(),
        name_transliteration: "al-Da'ira al-Muttafiqa".to_string(),
        description: "The Accordant Circle - the most complex circle with 5 harmonically related meters".to_string(),
        atomic_sequence: units(&["0/", "0/", "0//", "0/", "0/", "0//", "0/", "0/", "/0/"]),
        base_sequence_length: 12,
        meters: vec![
            meter(
                id,
                MeterDef {
                    id: "al-sari",
                    name: "البحر السريع",
                    transliteration: "al-Bahr al-Sarīʿ",
                    offset: 0,
                    groups: &[3, 3, 3],
                    pattern: "mustafʿilun mustafʿilun mafʿūlātu",
                    description: "The \"Swift\" meter, with rapid, energetic rhythm ideal for dynamic narratives.",
                    usage: "Popular for epic poetry and heroic tales, conveying speed and action.",
                },
                vec![example(
                    "نَحنُ في هَذِهِ الدُنيا عابِرونَ * وَإِلى الآخِرَةِ صائِرونَ",
                    "ابن سينا",
                    "We are but travelers in this world, and to the afterlife we are bound",
                    "Medieval",
                )],
            ),
            meter(
                id,
                MeterDef {
                    id: "al-munsarih",
                    name: "البحر المنسرح",
                    transliteration: "al-Bahr al-Munsarih",
                    offset: 3,
                    groups: &[3, 3, 3],
                    pattern: "mustafʿilun mafʿūlātu mustafʿilun",
                    description: "The \"Flowing\" meter, with an easy, unimpeded rhythm perfect for philosophical reflection.",
                    usage: "Used for contemplative and philosophical poetry, especially in the Abbasid period.",
                },
                vec![example(
                    "لَيس الغَريبُ غَريبَ الشَام وَاليَمَنِ * إِنَّ الغَريبَ غَريبُ اللَحدِ وَالكَفَنِ",
                    "ابن الرومي",
                    "The stranger is not the stranger of Syria and Yemen; the true stranger is the stranger of the grave and shroud",
                    "Abbasid",
                )],
            ),
            meter(
                id,
                MeterDef {
                    id: "al-khafif",
                    name: "البحر الخفيف",
                    transliteration: "al-Bahr al-Khafif",
                    offset: 4,
                    groups: &[3, 3, 3],
                    pattern: "fāʿilātun mustafiʿ lun fāʿilātun",
                    description: "The \"Light\" meter, creating a swift, airy quality ideal for delicate subjects.",
                    usage: "Popular for love poetry and nature descriptions, favored by court poets.",
                },
                vec![example(
                    "في أَيِّ يَومٍ مِنَ الأَيّامِ نَدفِنُها * نُحسِنُ صُنعاً بِأَن نُحيي وَنُدفِنُها",
                    "نزار قباني",
                    "On which day shall we bury it? We do well to both revive it and bury it",
                    "Modern",
                )],
            ),
            meter(
                id,
                MeterDef {
                    id: "al-mudari",
                    name: "البحر المضارع",
                    transliteration: "al-Bahr al-Mudāriʿ",
                    offset: 5,
                    groups: &[3, 3, 3],
                    pattern: "mafāʿīlun fāʿi lātun mafāʿīlun",
                    description: "The \"Resembling\" meter, creating subtle variations and nuanced rhythmic patterns.",
                    usage: "Less common but used for sophisticated, nuanced poetry requiring rhythmic variety.",
                },
                vec![example(
                    "أَينَ أَزمانُ الوَصلِ بِالأَندَلُس * لَم تَكُن أَحلامَاً وَلا أَطيافاً",
                    "ابن زيدون",
                    "Where are the times of union in Al-Andalus? They were not dreams nor phantoms",
                    "Andalusian",
                )],
            ),
            meter(
                id,
                MeterDef {
                    id: "al-muqtadab",
                    name: "البحر المقتضب",
                    transliteration: "al-Bahr al-Muqtadab",
                    offset: 6,
                    groups: &[3, 3, 3],
                    pattern: "mafʿūlātu mustafʿilun mustafʿilun",
                    description: "The \"Abbreviated\" meter, concise and powerful, often used in its shortened forms.",
                    usage: "Used for epigrams and brief, impactful verses requiring conciseness.",
                },
                vec![example(
                    "إِنَّ الحَياةَ طَريقُ أَوحَش * مَا بَينَ مَولِدِنا وَمَدفَنِنا",
                    "ميخائيل نعيمة",
                    "Life is a desolate path between our birth and our grave",
                    "Modern",
                )],
            ),
            meter(
                id,
                MeterDef {
                    id: "al-mujtath",
                    name: "البحر المجتث",
                    transliteration: "al-Bahr al-Mujtath",
                    offset: 10,
                    groups: &[3, 3, 3],
                    pattern: "mustafʿilun fāʿilātun mustafʿilun",
                    description: "The \"Uprooted\" meter, creating a sense of urgency and emotional intensity.",
                    usage: "Often used for prayers, religious verse, and emotionally charged poetry.",
                },
                vec![example(
                    "يا رَبِّ إِن عَظُمَت ذُنوبي كَثرَةً * فَلَقَد عَلِمتُ بِأَنَّ عَفوَكَ أَعظَمُ",
                    "أبو نواس",
                    "O Lord, if my sins have grown great in number, I know that Your forgiveness is greater",
                    "Abbasid",
                )],
            ),
        ],
        visual_theme: theme("#8B5CF6", "#7C3AED", ["#EDE9FE", "#C4B5FD"], "#6D28D9"),
        order: 4,
    }
}

fn consonant_circle() -> Circle {
    let id = CircleId::Consonant;
    Circle {
        id,
        name: "دائرة المتفق".to_string(),
        name_transliteration: "al-Da'ira al-Muttafiq".to_string(),
        description: "دائرة المتفق - تحتوي على بحور سريعة ذات أنماط إيقاعية كثيفة الحروف الساكنة".to_string(),
        atomic_sequence: units(&["0//", "0/", "0//", "0/", "0//", "0/", "0//", "0/", "0//", "0/"]),
        base_sequence_length: 10,
        meters: vec![
            meter(
                id,
                MeterDef {
                    id: "al-mutaqarib",
                    name: "البحر المتقارب",
                    transliteration: "al-Bahr al-Mutaqārib",
                    offset: 0,
                    groups: &[2, 2, 2, 2],
                    pattern: "faʿūlun faʿūlun faʿūlun faʿūlun",
                    description: "The \"Approaching\" meter, with closely spaced beats creating rapid, urgent rhythm.",
                    usage: "Perfect for dramatic monologues and emotional outbursts, popular in modern poetry.",
                },
                vec![
                    example(
                        "أفَدِ الحَيَوانَ حَدِيثاً ما لَهُ بَدُ * أو فَاصمُت فَالسَكوتُ لَكَ أَبَرُد",
                        "أبو العلاء المعري",
                        "Tell the living a necessary tale, or be silent, for silence is cooler for you",
                        "Abbasid",
                    ),
                    example(
                        "وَما نَيلُ الأَماني بِالتَمَنّي * وَلكِن تُؤخَذُ الدُنيا غِلاباً",
                        "أحمد شوقي",
                        "Hopes are not attained by wishing, but the world is taken by force",
                        "Modern",
                    ),
                ],
            ),
            meter(
                id,
                MeterDef {
                    id: "al-mutadarik",
                    name: "البحر المتدارك",
                    transliteration: "al-Bahr al-Mutadārik",
                    offset: 1,
                    groups: &[2, 2, 2, 2],
                    pattern: "fāʿilun fāʿilun fāʿilun fāʿilun",
                    description: "The \"Compensating\" meter, filling gaps left by other meters with its unique cadence.",
                    usage: "Relatively late addition to classical prosody, popular in folk songs and modern verse.",
                },
                vec![example(
                    "يا لَيلُ يا لَيلُ يا لَيلُ الصَبا * رُدَّ عَلى قَلبيَ المَهجُورِ صَباهُ",
                    "فاروق جويدة",
                    "O night, O night, O night of youth, return to my abandoned heart its youth",
                    "Contemporary",
                )],
            ),
        ],
        visual_theme: theme("#EF4444", "#DC2626", ["#FEE2E2", "#FCA5A5"], "#B91C1C"),
        order: 5,
    }
}
