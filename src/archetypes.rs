//! Static archetype content: type descriptors, code letters, axis poles
//!
//! Pure lookup tables, loaded once and never mutated. Unknown type codes
//! resolve to a designated fallback descriptor instead of failing.

use crate::{Axis, TypeCode};
use serde::Serialize;

/// Descriptive content for one of the sixteen type codes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub code: &'static str,
    pub title: &'static str,
    pub person: &'static str,
    pub quote: &'static str,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
}

/// One symbol of the type-code alphabet, with its display content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLetter {
    pub symbol: char,
    pub title: &'static str,
    pub description: &'static str,
}

/// Display name and tagline for one axis.
#[derive(Debug, Clone)]
pub struct AxisInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// One pole of an axis comparison panel.
#[derive(Debug, Clone)]
pub struct Pole {
    pub code: char,
    pub name: &'static str,
    pub description: &'static str,
}

/// Side-by-side pole content for one axis.
#[derive(Debug, Clone)]
pub struct PoleComparison {
    pub title: &'static str,
    pub low: Pole,
    pub high: Pole,
}

/// Fallback descriptor used when a code is absent from the table.
pub const FALLBACK: Archetype = Archetype {
    code: "????",
    title: "알 수 없음",
    person: "-",
    quote: "",
    keywords: &[],
    description: "-",
};

const ARCHETYPES: [Archetype; 16] = [
    Archetype {
        code: "TDPL",
        title: "엄격한 신학자형",
        person: "장 칼뱅",
        quote: "나의 마음을 주님께 드리나이다.",
        keywords: &["교리", "경건", "전통", "질서"],
        description: "\"오직 성경, 오직 믿음!\" 흔들리지 않는 신학적 뼈대를 중요하게 생각합니다. 감정적인 예배보다는 깊이 있는 말씀 해석과 거룩한 예전을 선호하는 대쪽 같은 선비형 크리스천입니다.",
    },
    Archetype {
        code: "TDPM",
        title: "지성적 변증가형",
        person: "C.S. 루이스",
        quote: "나는 태양이 떠오르는 것을 믿듯이 기독교를 믿는다.",
        keywords: &["이성", "논리", "현대적", "개인신앙"],
        description: "기독교를 논리적이고 지성적으로 변증하는 것을 즐깁니다. 신학은 보수적이지만, 그것을 현대인들이 이해할 수 있는 세련된 언어와 문화로 풀어내는 뇌가 섹시한 신앙인입니다.",
    },
    Archetype {
        code: "TDSL",
        title: "정의로운 개혁가형",
        person: "도산 안창호",
        quote: "낙망은 청년의 죽음이요, 청년이 죽으면 민족이 죽는다.",
        keywords: &["애국", "실력양성", "사회변혁", "정직"],
        description: "독실한 신앙심을 바탕으로 민족의 실력을 키우고 사회를 변화시키려 노력했던 행동하는 신앙인입니다. 믿음은 곧 정직한 삶과 사회적 책임으로 나타나야 한다고 믿습니다.",
    },
    Archetype {
        code: "TDSM",
        title: "행동하는 순교자형",
        person: "디트리히 본회퍼",
        quote: "값싼 은혜는 우리 교회의 치명적인 적이다.",
        keywords: &["제자도", "저항", "실천", "책임"],
        description: "말뿐인 신앙을 거부하고, 불의한 시대에 맞서 신앙의 대가를 지불합니다. 현대적인 감각을 가지고 있지만, 신앙의 원칙을 지키기 위해 목숨까지 걸 수 있는 강단 있는 유형입니다.",
    },
    Archetype {
        code: "TGPL",
        title: "뜨거운 경건주의자형",
        person: "존 웨슬리",
        quote: "세계는 나의 교구다.",
        keywords: &["성령체험", "개인성화", "규칙", "전통"],
        description: "\"내 마음이 이상하게 뜨거워졌다.\" 교회의 전통과 예전을 존중하면서도, 개인의 뜨거운 회심과 성령 체험을 강조합니다. 기도의 깊이를 아는 영적 모범생입니다.",
    },
    Archetype {
        code: "TGPM",
        title: "열정적 부흥사형",
        person: "빌리 그레이엄",
        quote: "천국은 예수 그리스도를 통해 가는 곳입니다.",
        keywords: &["전도", "축복", "현대적예배", "대중성"],
        description: "복잡한 신학 논쟁보다는 \"예수 믿고 구원받으세요!\"라는 단순하고 강력한 메시지를 좋아합니다. 현대적인 찬양과 뜨거운 통성기도가 있는 부흥회 스타일을 선호합니다.",
    },
    Archetype {
        code: "TGSL",
        title: "빈민가의 성자형",
        person: "손양원 목사",
        quote: "원수를 사랑하라.",
        keywords: &["사랑", "용서", "낮은곳", "헌신"],
        description: "\"사랑의 원자탄.\" 가장 낮은 곳에서 소외된 이들을 섬기며, 인간의 상식을 뛰어넘는 사랑과 용서를 실천합니다. 신학적 보수성을 지키면서도 삶으로 예수의 흔적을 보여주는 행동파입니다.",
    },
    Archetype {
        code: "TGSM",
        title: "사랑의 실천가형",
        person: "마더 테레사",
        quote: "위대한 사랑으로 작은 일을 할 수 있을 뿐입니다.",
        keywords: &["헌신", "봉사", "섬김", "순종"],
        description: "보수적인 신앙관을 가지고 있지만, 말보다는 행동으로 하나님의 사랑을 보여줍니다. 가장 낮은 곳에서 묵묵히 소외된 이들을 섬기는 것이 최고의 예배라고 생각합니다.",
    },
    Archetype {
        code: "CDPL",
        title: "고독한 수도사형",
        person: "토마스 머튼",
        quote: "침묵은 우리가 하나님께 드릴 수 있는 가장 깊은 기도입니다.",
        keywords: &["침묵", "관상", "영성", "열린마음"],
        description: "시끄러운 세상 속에서 고요한 침묵과 묵상을 추구합니다. 전통적인 예전(Liturgy) 속에서 깊은 영성을 찾으며, 타 종교나 사상과도 열린 마음으로 대화합니다.",
    },
    Archetype {
        code: "CDPM",
        title: "문화적 사색가형",
        person: "폴 틸리히",
        quote: "신앙은 '궁극적인 관심'에 사로잡히는 상태다.",
        keywords: &["문화", "철학", "존재", "현대성"],
        description: "성경을 문자적으로 믿기보다 철학적, 인문학적으로 재해석하여 현대인의 삶에 적용합니다. 지적인 호기심이 많고 세련된 신앙을 추구합니다.",
    },
    Archetype {
        code: "CDSL",
        title: "현실적 예언자형",
        person: "라인홀드 니버",
        quote: "바꿀 수 있는 것을 바꾸는 용기를 주소서.",
        keywords: &["현실주의", "정의", "사회윤리", "책임"],
        description: "개인의 도덕성만으로는 사회 문제를 해결할 수 없다고 봅니다. 냉철한 이성으로 사회 구조를 분석하고, 정의를 실현하기 위해 시스템을 바꾸려 노력하는 지성적 참여파입니다.",
    },
    Archetype {
        code: "CDSM",
        title: "사회적 실천가형",
        person: "장기려 박사",
        quote: "돈이 없어 치료를 못 받는 환자가 있어서는 안 된다.",
        keywords: &["인술", "사회복지", "청빈", "지성"],
        description: "\"바보 의사.\" 뛰어난 의술과 지성을 가졌지만, 그것을 자신의 부귀영화가 아닌 가난한 이웃을 위한 사회적 시스템(의료보험)을 만드는 데 사용하는 깨어있는 지식인입니다.",
    },
    Archetype {
        code: "CGPL",
        title: "자연 속의 신비가형",
        person: "성 프란치스코",
        quote: "주여, 나를 당신의 평화의 도구로 써 주소서.",
        keywords: &["평화", "생태", "청빈", "신비"],
        description: "교리는 유연하게, 영성은 깊게. 자연 만물과 교감하며 하나님의 신비를 체험합니다. 딱딱한 설교보다는 시와 노래, 아름다운 예전을 통해 하나님을 만납니다.",
    },
    Archetype {
        code: "CGPM",
        title: "따뜻한 치유자형",
        person: "헨리 나우웬",
        quote: "우리는 '상처 입은 치유자'입니다.",
        keywords: &["치유자", "심리", "내면", "공감"],
        description: "옳고 그름을 따지기보다 서로의 상처를 보듬어주는 공동체를 꿈꿉니다. 성경을 심리학적, 정서적으로 해석하여 현대인의 외로움을 위로하는 따뜻한 멘토형입니다.",
    },
    Archetype {
        code: "CGSL",
        title: "저항하는 평화주의자형",
        person: "윤동주 시인",
        quote: "별을 노래하는 마음으로 모든 죽어가는 것을 사랑해야지.",
        keywords: &["문학", "성찰", "저항", "순수"],
        description: "거친 투쟁보다는 맑은 영혼과 문학적 감수성으로 시대의 아픔에 공감하고 저항합니다. 잎새에 이는 바람에도 괴로워하는 순수한 신앙의 소유자입니다.",
    },
    Archetype {
        code: "CGSM",
        title: "꿈꾸는 혁명가형",
        person: "마틴 루터 킹",
        quote: "나에게는 꿈이 있습니다.",
        keywords: &["자유", "평등", "비폭력", "꿈"],
        description: "낡은 관습과 차별을 철폐하고 모두가 평등한 세상을 만듭니다. 뜨거운 웅변과 감동적인 연설로 사람들의 가슴에 불을 지르는 리더입니다.",
    },
];

const CODE_LETTERS: [CodeLetter; 8] = [
    CodeLetter {
        symbol: 'T',
        title: "Text (텍스트)",
        description: "성경의 절대적 권위와 문자적 해석",
    },
    CodeLetter {
        symbol: 'C',
        title: "Context (컨텍스트)",
        description: "성경의 역사적 맥락과 유연한 해석",
    },
    CodeLetter {
        symbol: 'D',
        title: "Discipline (훈련)",
        description: "제자훈련과 지성적 깨달음 중시",
    },
    CodeLetter {
        symbol: 'G',
        title: "Grace (은혜)",
        description: "성령 체험과 감성적 뜨거움 중시",
    },
    CodeLetter {
        symbol: 'P',
        title: "Private (개인)",
        description: "개인의 구원과 내면의 평안 우선",
    },
    CodeLetter {
        symbol: 'S',
        title: "Social (사회)",
        description: "사회 정의와 구조적 변혁 우선",
    },
    CodeLetter {
        symbol: 'L',
        title: "Liturgy (예전)",
        description: "전통적이고 엄숙한 예배 예전 선호",
    },
    CodeLetter {
        symbol: 'M',
        title: "Modern (현대)",
        description: "자유롭고 현대적인 열린 예배 선호",
    },
];

/// Resolve the descriptor for a type code, falling back for unknown codes.
pub fn lookup(code: &TypeCode) -> &'static Archetype {
    let code = code.to_string();
    ARCHETYPES
        .iter()
        .find(|a| a.code == code)
        .unwrap_or(&FALLBACK)
}

/// All sixteen descriptors in table order.
pub fn all() -> &'static [Archetype] {
    &ARCHETYPES
}

/// Display content for one alphabet symbol, if it is one of the eight.
pub fn code_letter(symbol: char) -> Option<&'static CodeLetter> {
    CODE_LETTERS.iter().find(|c| c.symbol == symbol)
}

/// Display name and tagline for an axis.
pub fn axis_info(axis: Axis) -> AxisInfo {
    match axis {
        Axis::Theology => AxisInfo {
            name: "신학 (Theology)",
            description: "성경을 바라보는 관점",
        },
        Axis::Drive => AxisInfo {
            name: "동력 (Drive)",
            description: "신앙생활의 에너지원",
        },
        Axis::Society => AxisInfo {
            name: "사회 (Society)",
            description: "믿음의 방향",
        },
        Axis::Culture => AxisInfo {
            name: "문화 (Culture)",
            description: "예배의 스타일",
        },
    }
}

/// Side-by-side pole comparison content for an axis.
pub fn axis_comparison(axis: Axis) -> PoleComparison {
    match axis {
        Axis::Theology => PoleComparison {
            title: "신학 (Theology): 성경을 바라보는 눈",
            low: Pole {
                code: 'T',
                name: "Text (텍스트)",
                description: "성경 문자주의 / 보수적 신학 / 절대적 권위",
            },
            high: Pole {
                code: 'C',
                name: "Context (컨텍스트)",
                description: "시대적 재해석 / 유연한 신학 / 역사적 맥락",
            },
        },
        Axis::Drive => PoleComparison {
            title: "동력 (Drive): 신앙의 에너지원",
            low: Pole {
                code: 'D',
                name: "Discipline (훈련)",
                description: "제자훈련/공부 / 지성적 깨달음 / 차분한 성찰",
            },
            high: Pole {
                code: 'G',
                name: "Grace (은혜)",
                description: "성령체험/집회 / 감성적 뜨거움 / 열정적 기도",
            },
        },
        Axis::Society => PoleComparison {
            title: "사회 (Society): 믿음의 방향",
            low: Pole {
                code: 'P',
                name: "Private (개인)",
                description: "개인의 구원 / 내면의 평안 / 가정/교회 중심",
            },
            high: Pole {
                code: 'S',
                name: "Social (사회)",
                description: "사회의 구원 / 구조적 정의 / 세상/참여 중심",
            },
        },
        Axis::Culture => PoleComparison {
            title: "문화 (Culture): 예배의 스타일",
            low: Pole {
                code: 'L',
                name: "Liturgy (예전)",
                description: "전통적 예배 / 엄숙함/경건 / 찬송가/오르간",
            },
            high: Pole {
                code: 'M',
                name: "Modern (현대)",
                description: "열린 예배 / 자유로움/축제 / CCM/밴드",
            },
        },
    }
}
