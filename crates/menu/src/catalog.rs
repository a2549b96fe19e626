use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Texture stage of the baby-food line
#[derive(
    EnumString, VariantArray, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
)]
pub enum Stage {
    #[default]
    #[strum(to_string = "early", serialize = "초기")]
    Early,
    #[strum(to_string = "mid", serialize = "중기")]
    Mid,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Early => "초기",
            Stage::Mid => "중기",
        }
    }

    pub fn menus_per_day(self) -> usize {
        match self {
            Stage::Early => 2,
            Stage::Mid => 3,
        }
    }

    pub fn menus(self) -> &'static [&'static str] {
        match self {
            Stage::Early => EARLY_STAGE_MENUS,
            Stage::Mid => MID_STAGE_MENUS,
        }
    }
}

pub const EARLY_STAGE_MENUS: &[&str] = &[
    "한우청경채죽",
    "양배추당근죽",
    "한우대추사과죽",
    "브로콜리감자죽",
    "닭고기단호박죽",
    "고구마찹쌀죽",
    "한우감자죽",
    "바나나배죽",
    "수수닭죽",
    "사과고구마죽",
    "한우양배추찹쌀죽",
    "감자당근죽",
    "브로콜리닭죽",
    "수수고구마죽",
    "한우근대죽",
    "사과타락죽",
    "한우적채죽",
    "애호박사과죽",
    "현미닭죽",
    "고구마브로콜리죽",
    "한우김가루죽",
    "찹쌀배죽",
    "애호박닭죽",
    "콜리플라워당근죽",
    "한우사과죽",
    "오트밀단호박죽",
    "찹쌀비타민닭죽",
    "고구마타락죽",
    "한우수수죽",
    "한우단호박당근죽",
    "고구마오트밀죽",
    "한우무죽",
    "브로콜리양배추죽",
];

pub const MID_STAGE_MENUS: &[&str] = &[
    "한우가지두부죽",
    "닭살사과고구마죽",
    "한우알배추죽",
    "찹쌀사과죽",
    "한우당근사과죽",
    "오트밀채소닭죽",
    "한우새송이순두부죽",
    "오트밀감자죽",
    "한우흑미배죽",
    "야채닭죽",
    "한우오이애호박죽",
    "병어리콩바나나죽",
    "한우양배추과일죽",
    "비타민채흰살생선죽",
    "한우애호박무죽",
    "닭살청경채당근죽",
    "한우시금치사과죽",
    "알밤고구마죽",
    "한우차조콜리죽",
    "블루베리고구마죽",
    "김연근한우죽",
    "닭고기단호박배죽",
    "한우아욱감자죽",
    "녹두대추닭죽",
    "한우검은콩애호박죽",
    "사과브로콜리죽",
];
