use super::domain::{FortuneLevel, ReadingError};
use super::scorer::ScoreBreakdown;
use serde::Serialize;

/// Complete reading handed to the presentation layer. Constructed
/// once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FortuneReading {
    pub score: u8,
    pub level: FortuneLevel,
    pub life_number: u8,
    pub name_number: u8,
    pub life_trait: &'static str,
    pub name_trait: &'static str,
    pub recommendations: Vec<&'static str>,
    pub lucky: Vec<&'static str>,
    pub unlucky: Vec<&'static str>,
}

const LIFE_TRAITS: [&str; 9] = [
    "领导力和独立性",
    "合作与和谐",
    "创造力和表达力",
    "稳重和务实",
    "适应力和自由",
    "责任心和关怀",
    "智慧和洞察力",
    "权威和物质成就",
    "博爱和奉献精神",
];

const NAME_TRAITS: [&str; 9] = [
    "适合独立创业",
    "善于团队合作",
    "具有艺术天赋",
    "擅长技术工作",
    "适合销售或传媒",
    "适合服务行业",
    "适合研究工作",
    "适合金融管理",
    "适合公益事业",
];

struct RecommendationSet {
    level: FortuneLevel,
    advice: [&'static str; 4],
}

const RECOMMENDATIONS: [RecommendationSet; 6] = [
    RecommendationSet {
        level: FortuneLevel::DaJi,
        advice: [
            "可以大胆推进重要计划",
            "适合开展新的事业",
            "是投资理财的有利时机",
            "人际关系将有显著提升",
        ],
    },
    RecommendationSet {
        level: FortuneLevel::Ji,
        advice: [
            "适合稳步推进既定计划",
            "可以考虑适度投资",
            "注意把握人际交往机会",
            "适合学习新技能",
        ],
    },
    RecommendationSet {
        level: FortuneLevel::XiaoJi,
        advice: [
            "维持现状为宜",
            "小心谨慎推进计划",
            "适合巩固既有成果",
            "注意身心健康调养",
        ],
    },
    RecommendationSet {
        level: FortuneLevel::Ping,
        advice: [
            "以稳为主，避免冒险",
            "做好风险防范",
            "适当调整节奏",
            "保持良好心态",
        ],
    },
    RecommendationSet {
        level: FortuneLevel::XiaoXiong,
        advice: [
            "谨慎行事，避免冒险",
            "推迟重要决定",
            "注意人际关系处理",
            "加强健康防护",
        ],
    },
    RecommendationSet {
        level: FortuneLevel::Xiong,
        advice: [
            "暂缓重要决策",
            "避免投资理财",
            "注意安全防护",
            "保持低调行事",
        ],
    },
];

const LUCKY_ITEMS: [&str; 10] = [
    "谈判签约",
    "投资理财",
    "出行旅游",
    "求职应聘",
    "开展业务",
    "学习进修",
    "人际交往",
    "装修搬家",
    "婚恋交友",
    "健康养生",
];

const UNLUCKY_ITEMS: [&str; 10] = [
    "重大投资",
    "争执冲突",
    "冒险活动",
    "大额支出",
    "重要决策",
    "远途旅行",
    "医疗手术",
    "搬家装修",
    "签订合同",
    "改变现状",
];

fn trait_phrase(
    table: &'static [&'static str; 9],
    digit: u8,
) -> Result<&'static str, ReadingError> {
    match digit {
        1..=9 => Ok(table[usize::from(digit) - 1]),
        other => Err(ReadingError::MissingTrait(other)),
    }
}

fn recommendations_for(level: FortuneLevel) -> Result<Vec<&'static str>, ReadingError> {
    RECOMMENDATIONS
        .iter()
        .find(|set| set.level == level)
        .map(|set| set.advice.to_vec())
        .ok_or(ReadingError::MissingRecommendations(level))
}

fn lucky_items(score: u8) -> Vec<&'static str> {
    let score = usize::from(score);
    let count = score / 30 + 1;
    (0..count)
        .map(|offset| LUCKY_ITEMS[(score + offset) % LUCKY_ITEMS.len()])
        .collect()
}

fn unlucky_items(score: u8) -> Vec<&'static str> {
    let distance = 100usize.saturating_sub(usize::from(score));
    let count = distance / 30 + 1;
    (0..count)
        .map(|offset| UNLUCKY_ITEMS[(distance + offset) % UNLUCKY_ITEMS.len()])
        .collect()
}

pub(crate) fn build_reading(breakdown: &ScoreBreakdown) -> Result<FortuneReading, ReadingError> {
    let level = FortuneLevel::for_score(breakdown.score);

    Ok(FortuneReading {
        score: breakdown.score,
        level,
        life_number: breakdown.life_number,
        name_number: breakdown.name_number,
        life_trait: trait_phrase(&LIFE_TRAITS, breakdown.life_number)?,
        name_trait: trait_phrase(&NAME_TRAITS, breakdown.name_number)?,
        recommendations: recommendations_for(level)?,
        lucky: lucky_items(breakdown.score),
        unlucky: unlucky_items(breakdown.score),
    })
}
