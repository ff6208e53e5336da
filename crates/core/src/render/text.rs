//! Plain-text rendering of the hub, detail and error screens.

use std::fmt::Write as _;

use crate::{
    catalog::Catalog,
    model::{Circle, CircleId, Meter},
    resolver::ResolvedFoot,
    view::Screen,
};

const HUB_TITLE: &str = "دوائر العروض الخمس";
const HUB_SUBTITLE: &str = "نظام الخليل بن أحمد الفراهيدي للعروض العربي";
/// Meters listed per circle on the hub before the rest are summarised.
const HUB_PREVIEW: usize = 3;
const HUB_ATTRIBUTION: &str = "This digital representation preserves Al-Khalil ibn Ahmad al-Farahidi's \
foundational work in Arabic prosody, offering an interactive exploration of classical Arabic poetry meters.";

const ABOUT_TITLE: &str = "عن دوائر العروض";
const ABOUT_INTRO: &str = "دائرة العروض هي نظام رياضي عبقري وضعه الخليل بن أحمد الفراهيدي (ت ١٧٥هـ) \
لتنظيم بحور الشعر العربي. تقوم هذه الدائرة على تسلسل أساسي من الوحدات المقطعية التي تتكرر في حلقة مغلقة.";

/// The four atomic units: name, symbol and syllable make-up.
const UNIT_GLOSSARY: [(&str, &str, &str); 4] = [
    ("الوتد المجموع", "//0", "مقطعان قصيران + مقطع طويل"),
    ("السبب الخفيف", "/0", "مقطع قصير + مقطع طويل"),
    ("السبب الثقيل", "//", "مقطعان قصيران"),
    ("الوتد المفروق", "/0/", "مقطع قصير + مقطع طويل + مقطع قصير"),
];

pub fn render_screen(screen: &Screen<'_>) -> String {
    match screen {
        Screen::Hub { catalog } => render_hub(catalog),
        Screen::Detail {
            circle,
            meter,
            index,
            pattern,
        } => render_detail(circle, meter, *index, pattern),
        Screen::Empty { circle } => render_empty(circle),
        Screen::Missing { circle } => render_missing(*circle),
    }
}

pub fn render_hub(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HUB_TITLE}");
    let _ = writeln!(out, "{HUB_SUBTITLE}");
    out.push('\n');

    for circle in catalog.circles() {
        let _ = writeln!(
            out,
            "[{}] {}  {}  ({} بحر)",
            circle.order,
            circle.name,
            circle.name_transliteration,
            circle.meter_count()
        );
        let _ = writeln!(out, "    {}", circle.description);
        let preview: Vec<&str> = circle
            .meters
            .iter()
            .take(HUB_PREVIEW)
            .map(|meter| meter.name.as_str())
            .collect();
        let _ = write!(out, "    {}", preview.join("، "));
        if circle.meter_count() > HUB_PREVIEW {
            let _ = write!(out, "  +{} بحر آخر", circle.meter_count() - HUB_PREVIEW);
        }
        out.push('\n');
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "{} Classical Meters · {} Prosodic Circles · 1000+ Years of Tradition",
        catalog.total_meter_count(),
        catalog.circles().len()
    );
    let _ = writeln!(out, "{HUB_ATTRIBUTION}");
    out
}

/// Background on the circles and a glossary of their atomic units.
pub fn render_about() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{ABOUT_TITLE}");
    let _ = writeln!(out, "{ABOUT_INTRO}");
    out.push('\n');
    let _ = writeln!(out, "الوحدات الأساسية:");
    for (name, symbol, syllables) in UNIT_GLOSSARY {
        let _ = writeln!(out, "  {name} ({symbol}): {syllables}");
    }
    out
}

fn progress_dots(active: usize, len: usize) -> String {
    (0..len)
        .map(|i| if i == active { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_detail(circle: &Circle, meter: &Meter, index: usize, pattern: &[ResolvedFoot]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Circle Hub → {} → {}",
        circle.name_transliteration, meter.name_transliteration
    );
    out.push('\n');
    let _ = writeln!(
        out,
        "({}) {}  {}",
        circle.order, circle.name, circle.name_transliteration
    );
    let _ = writeln!(out, "{}", circle.description);
    let _ = writeln!(out, "{}", progress_dots(index, circle.meter_count()));
    out.push('\n');

    let _ = writeln!(out, "{}    OFFSET: {}", meter.name, meter.start_offset);
    let _ = writeln!(out, "{}", meter.description);
    if !meter.historical_usage.is_empty() {
        let _ = writeln!(out, "\nHistorical Usage\n  {}", meter.historical_usage);
    }

    let merged: Vec<&str> = pattern.iter().map(|f| f.tafila.merged.as_str()).collect();
    let unmerged: Vec<&str> = pattern.iter().map(|f| f.tafila.unmerged.as_str()).collect();
    let groups: Vec<String> = pattern
        .iter()
        .map(|f| format!("[{}]", f.group.units.join(" ")))
        .collect();
    let _ = writeln!(out, "\nPattern (Taf'īlāt)");
    let _ = writeln!(out, "  {}", merged.join(" "));
    let _ = writeln!(out, "  {}", unmerged.join(" | "));
    let _ = writeln!(out, "  {}", groups.join(" "));
    let _ = writeln!(out, "  {}", meter.pattern_transliteration);

    if let Some(example) = meter.featured_example() {
        let _ = writeln!(out, "\nFamous Example");
        let _ = writeln!(out, "  {}", example.text);
        let _ = writeln!(out, "  Poet: {} ({})", example.poet, example.era);
        if let Some(translation) = &example.translation {
            let _ = writeln!(out, "  \"{translation}\"");
        }
    }

    out.push('\n');
    let _ = writeln!(out, "{} contains {} meters", circle.name, circle.meter_count());
    let names: Vec<String> = circle
        .meters
        .iter()
        .enumerate()
        .map(|(i, m)| {
            if i == index {
                format!("[{}]", m.name)
            } else {
                m.name.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", names.join("  "));
    out
}

pub fn render_empty(circle: &Circle) -> String {
    format!(
        "{} ({})\nThis circle has no meters.\nReturn to Hub with `back`.\n",
        circle.name, circle.name_transliteration
    )
}

pub fn render_missing(circle: CircleId) -> String {
    format!("Error: Circle not found ({circle})\nReturn to Hub with `back`.\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Catalog, resolver::PatternResolver, view::Navigator};

    #[test]
    fn hub_lists_circles_in_order_with_overflow() {
        let catalog = Catalog::builtin();
        let hub = render_hub(&catalog);

        let first = hub.find("[1]").unwrap();
        let fifth = hub.find("[5]").unwrap();
        assert!(first < fifth);
        assert!(hub.contains("(6 بحر)"));
        assert!(hub.contains("+3 بحر آخر"));
    }

    #[test]
    fn hub_ends_with_catalog_totals() {
        let hub = render_hub(&Catalog::builtin());
        let totals = hub.find("16 Classical Meters · 5 Prosodic Circles").unwrap();
        assert!(totals > hub.find("[5]").unwrap());
        assert!(hub.trim_end().ends_with("classical Arabic poetry meters."));

        let mut circles = Catalog::builtin().circles().to_vec();
        circles.truncate(2);
        let hub = render_hub(&Catalog::new(circles));
        assert!(hub.contains("5 Classical Meters · 2 Prosodic Circles"));
    }

    #[test]
    fn about_lists_the_four_atomic_units() {
        let about = render_about();
        assert!(about.starts_with("عن دوائر العروض"));
        assert!(about.contains("الوتد المجموع (//0): مقطعان قصيران + مقطع طويل"));
        assert!(about.contains("السبب الخفيف (/0)"));
        assert!(about.contains("السبب الثقيل (//)"));
        assert!(about.contains("الوتد المفروق (/0/): مقطع قصير + مقطع طويل + مقطع قصير"));
    }

    #[test]
    fn empty_circle_screen_names_the_circle() {
        let mut circle = Catalog::builtin().circle(CircleId::Accordant).unwrap().clone();
        circle.meters.clear();
        let catalog = Catalog::new(vec![circle]);
        let mut nav = Navigator::new();
        nav.select_circle(CircleId::Accordant);

        let text = render_screen(&nav.screen(&catalog, &PatternResolver::default()));
        assert!(text.starts_with("دائرة"));
        assert!(text.contains("This circle has no meters."));
        assert!(text.contains("back"));
    }

    #[test]
    fn detail_shows_pattern_and_example() {
        let catalog = Catalog::builtin();
        let resolver = PatternResolver::default();
        let mut nav = Navigator::new();
        nav.select_circle(CircleId::Mixed);

        let text = render_screen(&nav.screen(&catalog, &resolver));
        assert!(text.starts_with("Circle Hub → al-Da'ira al-Mukhtalita → al-Bahr al-Tawil"));
        assert!(text.contains("فعولن مفاعيلن فعولن مفاعيلن"));
        assert!(text.contains("[0// 0/] [0// 0/ 0/]"));
        assert!(text.contains("OFFSET: 0"));
        assert!(text.contains("Poet: امرؤ القيس (Pre-Islamic)"));
        assert!(text.contains("● ○ ○"));
    }

    #[test]
    fn missing_circle_offers_the_way_back() {
        let text = render_missing(CircleId::Pure);
        assert!(text.contains("circle2-pure"));
        assert!(text.contains("back"));
    }
}
