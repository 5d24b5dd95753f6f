use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Diamond,
}

impl FaceShape {
    pub const ALL: [FaceShape; 5] = [
        FaceShape::Oval,
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Heart,
        FaceShape::Diamond,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceShape::Oval => "oval",
            FaceShape::Round => "round",
            FaceShape::Square => "square",
            FaceShape::Heart => "heart",
            FaceShape::Diamond => "diamond",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StyleSuggestions {
    pub face_shape: FaceShape,
    pub hair: [&'static str; 4],
    pub beard: [&'static str; 4],
}

pub fn suggestions_for(shape: FaceShape) -> StyleSuggestions {
    let (hair, beard) = match shape {
        FaceShape::Oval => (
            ["Layered Cut", "Side Swept Bang", "Long Wavy", "Medium Length Bob"],
            ["Full Beard", "Goatee", "Circle Beard", "Soul Patch"],
        ),
        FaceShape::Round => (
            ["Angular Bob", "Layered Pixie", "Side Part", "Long Straight"],
            ["Van Dyke", "Extended Goatee", "Chin Strap", "Full Beard"],
        ),
        FaceShape::Square => (
            ["Soft Waves", "Side Bang", "Layered Long", "Textured Bob"],
            ["Circle Beard", "Rounded Goatee", "Soul Patch", "Light Stubble"],
        ),
        FaceShape::Heart => (
            ["Chin Length Bob", "Side Swept", "Wispy Fringe", "Long Layers"],
            ["Full Beard", "Horseshoe", "Mutton Chops", "Extended Goatee"],
        ),
        FaceShape::Diamond => (
            ["Full Fringe", "Chin Length", "Textured Waves", "Side Part"],
            ["Full Beard", "Circle Beard", "Goatee", "Anchor Beard"],
        ),
    };

    StyleSuggestions {
        face_shape: shape,
        hair,
        beard,
    }
}
