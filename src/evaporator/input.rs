use serde::{Deserialize, Serialize};

/// 증발관 설계 입력. 폼/CLI/입력 파일이 한 번 제출할 때마다 하나씩 만들어진다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessInput {
    /// 효용 수 (제품 요구사항상 2~4)
    pub effects: usize,
    /// 원액 유량(m³/h)
    pub feed_flow_m3_per_h: f64,
    /// 원액 건물(DM, %)
    pub feed_dm_pct: f64,
    /// 원액 부유고형물(TSS, %). DM 이하여야 한다.
    pub feed_tss_pct: f64,
    /// 원액 온도(°C). 현재 계산에는 쓰이지 않는다.
    pub feed_temp_c: f64,
    /// 목표 제품 건물(%)
    pub product_dm_pct: f64,
    /// 가열증기 게이지압(bar g)
    pub steam_pressure_barg: f64,
}

impl Default for ProcessInput {
    fn default() -> Self {
        Self {
            effects: 3,
            feed_flow_m3_per_h: 41.67,
            feed_dm_pct: 2.38,
            feed_tss_pct: 1.5,
            feed_temp_c: 25.0,
            product_dm_pct: 15.0,
            steam_pressure_barg: 1.0,
        }
    }
}

impl ProcessInput {
    /// 원액 → 제품까지 효용 수+1개 지점의 DM(%) 궤적. 0번은 원액, 마지막은 제품.
    pub fn dry_matter_trajectory(&self) -> Vec<f64> {
        linspace(self.feed_dm_pct, self.product_dm_pct, self.effects.saturating_add(1))
    }
}

/// `start`~`end` 양끝 포함 `count`개 등간격 값.
pub(crate) fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}
