//! Question catalog: the built-in bank and JSON-loaded variants

use crate::{Axis, Question};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Ordered, validated question bank. Built once at startup and treated as
/// read-only configuration; question indices are stable for a catalog's lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Validate and wrap a question list. Every axis must have at least one
    /// question, otherwise its average would be undefined.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        for axis in Axis::ALL {
            if !questions.iter().any(|q| q.axis == axis) {
                anyhow::bail!("catalog has no questions for axis {}", axis);
            }
        }
        Ok(Self { questions })
    }

    /// Load a catalog from a JSON file (array of questions).
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let questions: Vec<Question> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in catalog: {}", path.display()))?;
        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Catalog indices of the questions belonging to one axis, in catalog order.
    pub fn axis_indices(&self, axis: Axis) -> Vec<usize> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, q)| q.axis == axis)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn axis_count(&self, axis: Axis) -> usize {
        self.questions.iter().filter(|q| q.axis == axis).count()
    }

    /// The built-in 50-question bank (15 Theology, 15 Drive, 10 Society, 10 Culture).
    pub fn builtin() -> Self {
        fn q(text: &str, axis: Axis, reverse: bool) -> Question {
            Question {
                text: text.to_string(),
                axis,
                reverse,
            }
        }
        use Axis::{Culture, Drive, Society, Theology};

        let questions = vec![
            q("성경에 기록된 기적(홍해 가름 등)은 과학적으로 설명되지 않아도 문자 그대로의 사실이다.", Theology, true),
            q("진화론은 성경의 창조 섭리를 부정하는 것이므로, 타협 없이 배격해야 한다.", Theology, true),
            q("여성이 목사 안수를 받고 설교하는 것은 성경적 질서에 어긋난다고 생각한다.", Theology, true),
            q("타종교에도 구원의 가능성이 있거나 배울 점이 있다고 인정하는 것은 위험하다.", Theology, true),
            q("동성애는 인권 문제가 아니라 성경이 금지하는 '치유받아야 할 죄'의 문제다.", Theology, true),
            q("설교라도 나의 이성과 상식에 비추어 납득이 가지 않으면 비판적으로 수용해야 한다.", Theology, false),
            q("술/담배는 구원과 무관하지만, 직분자라면 엄격히 금해야 한다.", Theology, true),
            q("'예수 천국, 불신 지옥' 구호는 기독교 진리를 너무 단순화시킨 것이라 거부감이 든다.", Theology, false),
            q("설교 시간에 인문학, 철학, 영화 이야기가 자주 인용되는 것이 자연스럽고 유익하다.", Theology, false),
            q("성경의 어떤 명령들은 당시 문화적 배경 때문이므로 현대에 문자 그대로 적용해선 안 된다.", Theology, false),
            q("사랑보다는 죄에 대한 엄격한 지적과 심판을 강조하는 설교가 더 영적이라고 느낀다.", Theology, true),
            q("교회는 세상 문화가 침투하지 못하도록 거룩하게 구별된 방파제 역할을 해야 한다.", Theology, true),
            q("사랑의 하나님이 믿지 않는다는 이유로 사람을 지옥에 던지신다는 교리에 감정적 어려움을 느낀다.", Theology, false),
            q("정신의학보다 기도가 우울증 해결의 근본 열쇠라고 믿는다.", Theology, true),
            q("사도신경이나 주기도문 형식을 생략하는 것은 예배의 거룩함을 해친다.", Theology, true),
            q("다 같이 '주여!'를 크게 외치고 통성 기도할 때 영적인 시원함을 느낀다.", Drive, false),
            q("방언, 신유 같은 성령의 은사는 오늘날 예배 때도 강력하게 나타나야 한다.", Drive, false),
            q("하나님을 잘 믿으면 자녀 성공, 사업 번창 같은 현실적인 복을 주신다고 믿는다.", Drive, false),
            q("눈물이나 가슴 뜨거운 '정서적 체험'이 없는 예배는 건조하다.", Drive, false),
            q("신앙생활의 본질은 복을 누리는 것보다, 자기를 부인하고 고난을 견디는 훈련이다.", Drive, true),
            q("뜨거운 집회보다 성경을 체계적으로 공부하는 제자훈련이 더 유익하다.", Drive, true),
            q("논리적 가르침보다 투박하더라도 강력한 카리스마와 열정으로 선포해주길 원한다.", Drive, false),
            q("단순하고 반복적인 찬양(CCM)을 부르며 감정에 몰입하는 시간이 길었으면 좋겠다.", Drive, false),
            q("예배 순서가 빈틈없이 진행되는 엄숙하고 질서 있는 분위기가 편안하다.", Drive, true),
            q("설교가 나를 꾸짖기보다 지친 마음을 따뜻하게 위로해주길 바란다.", Drive, false),
            q("친근한 리더십보다 범접하기 어려운 영적 권위가 있는 '선지자' 같은 목사님이 좋다.", Drive, false),
            q("신앙 성장은 뜨거운 열심보다 인격이 성숙해지고 삶이 차분해지는 것이다.", Drive, true),
            q("찬양 중 '다 같이 일어납시다' 할 때 기쁘게 동참한다.", Drive, false),
            q("예화 위주 설교보다 원어의 의미를 풀이해주는 강해 설교를 선호한다.", Drive, true),
            q("소리 내어 부르짖는 것보다 침묵하며 관상 기도하는 것이 더 맞는다.", Drive, true),
            q("강단에서 정치나 사회 이슈 발언은 교회의 본질에서 벗어난 것이다.", Society, true),
            q("최우선 사명은 사회 개혁보다 한 영혼 전도하여 구원받게 하는 것이다.", Society, true),
            q("개인의 회개뿐 아니라 사회의 불의한 구조를 바꾸기 위해 교회가 목소리를 내야 한다.", Society, false),
            q("사회적 현장(집회 등)에 기독교인이 깃발을 들고 참여하는 것은 자연스럽다.", Society, false),
            q("교회 예산 상당 부분은 건물 유지보다 외부 구제와 사회적 약자를 위해 쓰여야 한다.", Society, false),
            q("예수님의 사역은 죄 사함만큼이나 가난하고 억눌린 자 해방에 있었다.", Society, false),
            q("세상과 구별됨은 담을 쌓는 게 아니라 세상 속에서 정의를 실천하는 것이다.", Society, false),
            q("차별금지법 등 사회적 법안에 대해 교회가 적극적으로 입장을 표명해야 한다.", Society, false),
            q("직장에서 성공하여 높은 자리에 오르는 것이 곧 하나님께 영광 돌리는 길이다.", Society, true),
            q("'정교분리'는 교회가 사회적 책임을 회피하는 핑계로 쓰일 때가 많다.", Society, false),
            q("예배 시간에 드럼이나 일렉기타 소리가 크면 경건함이 깨진다고 느낀다.", Culture, true),
            q("목사님이 청바지나 티셔츠를 입고 설교하는 것도 괜찮다.", Culture, false),
            q("사도신경/주기도문을 매주 암송하기보다 상황에 맞춰 생략하거나 찬양으로 대체해도 좋다.", Culture, false),
            q("교회 건물은 십자가, 스테인드글라스 등 종교적 상징과 엄숙함이 있어야 한다.", Culture, true),
            q("교회 안에서 '형제/자매님'보다 '장로/권사님' 직분 호칭이 질서 있어 보인다.", Culture, true),
            q("불신자도 오기 쉬운 '카페 같은 분위기'의 열린 예배를 선호한다.", Culture, false),
            q("온라인 예배도 현장 예배만큼이나 영적인 가치가 있다.", Culture, false),
            q("본당은 거룩한 곳이므로 평일에 공연장 등 다른 용도로 쓰는 건 조심스럽다.", Culture, true),
            q("주일 성수도 부득이한 사정이 있으면 융통성 있게(온라인/타교회) 할 수 있다.", Culture, false),
            q("최신 드라마, 영화, 뉴스 등이 설교 예화로 자주 등장하는 것이 좋다.", Culture, false),
        ];

        Self { questions }
    }
}
