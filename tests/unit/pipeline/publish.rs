use super::*;
use crate::theme::palette::NewsTheme;

fn news_script() -> Script {
    Script {
        title: "Closing Bell Summary".to_owned(),
        subtitle: "How markets ended today".to_owned(),
        content: vec!["Nifty closed higher".to_owned(), "IT led gains".to_owned()],
        narration_text: "And that's the close.".to_owned(),
        visual_prompt: None,
        summary: None,
        theme: Theme::News(NewsTheme::MarketClose),
    }
}

#[test]
fn news_description_lists_numbered_points() {
    let d = describe(&news_script(), "Game of Crores");
    assert!(d.starts_with("Market Closing Summary\n\nHow markets ended today"));
    assert!(d.contains("Key Points:\n1. Nifty closed higher\n2. IT led gains"));
    assert!(d.contains("Follow Game of Crores for daily market updates!"));
    assert!(d.contains("#GameofCrores #Shorts"));
}

#[test]
fn fact_description_includes_summary() {
    let mut s = news_script();
    s.theme = Theme::Fact(FactCategory::Space);
    s.subtitle = "Stars are weird".to_owned();
    s.summary = Some("Neutron stars spin fast.".to_owned());
    let d = describe(&s, "FactLab");
    assert!(d.starts_with("Stars are weird\n\nNeutron stars spin fast."));
    assert!(d.contains("#DidYouKnow"));
}

#[test]
fn news_tags_lead_with_theme_name() {
    let t = tags(Theme::News(NewsTheme::Midday), "GameofCrores");
    assert_eq!(&t[..3], ["midday", "shorts", "GameofCrores"]);
    assert!(t.contains(&"Sensex".to_owned()));
}

#[test]
fn fact_tags_add_category_terms() {
    let t = tags(Theme::Fact(FactCategory::Ocean), "x");
    assert_eq!(t.len(), 8 + 5);
    assert_eq!(t[0], "shorts");
    assert!(t.contains(&"marinelife".to_owned()));

    let general = tags(Theme::Fact(FactCategory::General), "x");
    assert_eq!(general.len(), 8);
}
