// Localized alert message templates.
//
// Templates use `{village}` and `{category}` placeholders. Only the three
// active alert levels have templates; No Alert deliberately has none.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::model::{AlertLevel, Language};

lazy_static! {
    static ref TEMPLATES: HashMap<(Language, AlertLevel), &'static str> = {
        let mut m = HashMap::new();
        m.insert(
            (Language::English, AlertLevel::Advisory),
            "Landslide Risk Advisory for {village}. Risk Level: {category}. Monitor weather conditions closely.",
        );
        m.insert(
            (Language::English, AlertLevel::Warning),
            "Landslide Warning for {village}! Risk Level: {category}. Prepare for possible evacuation.",
        );
        m.insert(
            (Language::English, AlertLevel::Evacuate),
            "IMMEDIATE EVACUATION REQUIRED for {village}. Risk Level: {category}. Move to designated shelters now.",
        );
        m.insert(
            (Language::Hindi, AlertLevel::Advisory),
            "{village} के लिए भूस्खलन जोखिम सलाह। जोखिम स्तर: {category}। मौसम की स्थिति की निगरानी करें।",
        );
        m.insert(
            (Language::Hindi, AlertLevel::Warning),
            "{village} के लिए भूस्खलन चेतावनी! जोखिम स्तर: {category}। संभावित निकासी के लिए तैयार रहें।",
        );
        m.insert(
            (Language::Hindi, AlertLevel::Evacuate),
            "तत्काल निकासी आवश्यक {village}। जोखिम स्तर: {category}। अभी सुरक्षित आश्रयों में जाएं।",
        );
        m.insert(
            (Language::Khasi, AlertLevel::Advisory),
            "Ka jingsngewbha ha {village}. Jingialang: {category}. Khlain ruh ka bynta.",
        );
        m.insert(
            (Language::Khasi, AlertLevel::Warning),
            "Ka jingsngewbha kaba bha ha {village}! Jingialang: {category}. Lah bynta sha ka evacuation.",
        );
        m.insert(
            (Language::Khasi, AlertLevel::Evacuate),
            "PYRSHAH EVACUATION HA {village}. Jingialang: {category}. Shong da ka jingïaiñ mynta.",
        );
        m
    };
}

/// Template for a level/language pair, if one exists.
pub fn template(level: AlertLevel, language: Language) -> Option<&'static str> {
    TEMPLATES.get(&(language, level)).copied()
}

/// Fill a template's placeholders in a single pass over the template.
///
/// Substituted values are copied verbatim, so a village name that itself
/// contains `{category}` is never expanded.
pub fn render(template: &str, village_name: &str, category: &str) -> String {
    let mut out = String::with_capacity(template.len() + village_name.len() + category.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{village}") {
            out.push_str(village_name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{category}") {
            out.push_str(category);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_active_level_has_every_language() {
        for language in Language::ALL {
            for level in [AlertLevel::Advisory, AlertLevel::Warning, AlertLevel::Evacuate] {
                let text = template(level, language).unwrap();
                assert!(text.contains("{village}"), "{language} {level}");
                assert!(text.contains("{category}"), "{language} {level}");
            }
            assert!(template(AlertLevel::NoAlert, language).is_none());
        }
    }

    #[test]
    fn test_render_fills_placeholders() {
        let text = render("{village} is {category}", "Dawki", "High");
        assert_eq!(text, "Dawki is High");
    }

    #[test]
    fn test_render_does_not_expand_substituted_values() {
        let text = render("{village} is {category}", "{category} Hill", "High");
        assert_eq!(text, "{category} Hill is High");

        let text = render("{category}: {village}", "Low", "{village}");
        assert_eq!(text, "{village}: Low");
    }

    #[test]
    fn test_render_keeps_unknown_braces() {
        let text = render("{x} {village} {", "Dawki", "High");
        assert_eq!(text, "{x} Dawki {");
    }
}
