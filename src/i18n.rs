use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";
    pub const ASSUMPTION_NOTE: &str = "general.assumption_note";

    pub const BALANCE_HEADING: &str = "report.balance_heading";
    pub const EFFECTS_HEADING: &str = "report.effects_heading";
    pub const FEED_FLOW: &str = "report.feed_flow";
    pub const FEED_DM: &str = "report.feed_dm";
    pub const FEED_TSS: &str = "report.feed_tss";
    pub const FEED_TDS: &str = "report.feed_tds";
    pub const PRODUCT_FLOW: &str = "report.product_flow";
    pub const PRODUCT_DM: &str = "report.product_dm";
    pub const WATER_EVAPORATED: &str = "report.water_evaporated";
    pub const STEAM_NEEDED: &str = "report.steam_needed";
    pub const STEAM_POWER: &str = "report.steam_power";
    pub const STEAM_ECONOMY: &str = "report.steam_economy";
    pub const STEAM_TEMP: &str = "report.steam_temp";
    pub const TOTAL_THERMAL: &str = "report.total_thermal";
    pub const CONDENSER_LOAD: &str = "report.condenser_load";

    pub const COL_EFFECT: &str = "column.effect";
    pub const COL_PRESSURE: &str = "column.pressure";
    pub const COL_BOILING: &str = "column.boiling";
    pub const COL_BPE: &str = "column.bpe";
    pub const COL_DRIVING_DT: &str = "column.driving_dt";
    pub const COL_VAPOR_KG: &str = "column.vapor_kg";
    pub const COL_VAPOR_M3: &str = "column.vapor_m3";
    pub const COL_CONCENTRATE_KG: &str = "column.concentrate_kg";
    pub const COL_CONCENTRATE_M3: &str = "column.concentrate_m3";

    pub const INTERACTIVE_HEADING: &str = "prompt.heading";
    pub const PROMPT_EFFECTS: &str = "prompt.effects";
    pub const PROMPT_FEED_FLOW: &str = "prompt.feed_flow";
    pub const PROMPT_FEED_DM: &str = "prompt.feed_dm";
    pub const PROMPT_FEED_TSS: &str = "prompt.feed_tss";
    pub const PROMPT_FEED_TEMP: &str = "prompt.feed_temp";
    pub const PROMPT_PRODUCT_DM: &str = "prompt.product_dm";
    pub const PROMPT_STEAM_PRESSURE: &str = "prompt.steam_pressure";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_EFFECTS_RANGE: &str = "error.effects_range";

    pub const SAT_HEADING: &str = "saturation.heading";
    pub const SAT_TEMPERATURE: &str = "saturation.temperature";
    pub const SAT_PRESSURE: &str = "saturation.pressure";
    pub const SAT_DESIGN_PRESSURE: &str = "saturation.design_pressure";
    pub const SAT_DESIGN_TEMPERATURE: &str = "saturation.design_temperature";
    pub const SAT_REFERENCE: &str = "saturation.reference";
    pub const SAT_DEVIATION: &str = "saturation.deviation";
    pub const SAT_LATENT_HEAT: &str = "saturation.latent_heat";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 `locales/`를 시도하고, 그래도 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> Cow<'static, str> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Cow::Owned(v.clone());
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        Cow::Borrowed(builtin.unwrap_or("[missing translation]"))
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: `[report] feed_flow = "..."` 같은 중첩 테이블 또는 플랫 맵.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        WARNING_PREFIX => "주의",
        ASSUMPTION_NOTE => "참고: 결과는 예비설계용 추정치입니다. BPE는 {curve} 곡선을 기준으로 합니다.",
        BALANCE_HEADING => "\n== 물질·에너지 수지 ==",
        EFFECTS_HEADING => "\n== 효용별 요약 ==",
        FEED_FLOW => "원액 유량 (m³/h)",
        FEED_DM => "원액 건물 (%)",
        FEED_TSS => "원액 TSS (%)",
        FEED_TDS => "원액 TDS (%)",
        PRODUCT_FLOW => "제품 유량 (m³/h)",
        PRODUCT_DM => "제품 건물 (%)",
        WATER_EVAPORATED => "증발수 (kg/h)",
        STEAM_NEEDED => "필요 증기량 (kg/h)",
        STEAM_POWER => "증기측 열량 (kW)",
        STEAM_ECONOMY => "증기 경제성",
        STEAM_TEMP => "증기 온도 (°C)",
        TOTAL_THERMAL => "전체 열부하 (kW)",
        CONDENSER_LOAD => "최종 복수기 열부하 (kW)",
        COL_EFFECT => "효용",
        COL_PRESSURE => "절대압 (kPa)",
        COL_BOILING => "비점 (°C)",
        COL_BPE => "BPE (°C)",
        COL_DRIVING_DT => "ΔT (°C)",
        COL_VAPOR_KG => "증기 (kg/h)",
        COL_VAPOR_M3 => "증기 (m³/h)",
        COL_CONCENTRATE_KG => "농축액 (kg/h)",
        COL_CONCENTRATE_M3 => "농축액 (m³/h)",
        INTERACTIVE_HEADING => "\n-- 증발관 설계 입력 (엔터 = 기본값) --",
        PROMPT_EFFECTS => "효용 수",
        PROMPT_FEED_FLOW => "원액 유량 [m³/h]",
        PROMPT_FEED_DM => "원액 건물 [%]",
        PROMPT_FEED_TSS => "원액 TSS [%]",
        PROMPT_FEED_TEMP => "원액 온도 [°C]",
        PROMPT_PRODUCT_DM => "제품 건물 [%]",
        PROMPT_STEAM_PRESSURE => "증기 압력",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_EFFECTS_RANGE => "효용 수는 0~{max} 사이여야 합니다.",
        SAT_HEADING => "\n-- 포화 모델 비교 (설계 모델 vs IAPWS-IF97) --",
        SAT_TEMPERATURE => "포화 온도 (°C)",
        SAT_PRESSURE => "절대압 (kPa)",
        SAT_DESIGN_PRESSURE => "설계 모델 압력 (Antoine, kPa)",
        SAT_DESIGN_TEMPERATURE => "설계 모델 온도 (표 보간, °C)",
        SAT_REFERENCE => "IF97 기준값",
        SAT_DEVIATION => "편차",
        SAT_LATENT_HEAT => "IF97 증발잠열 (kJ/kg)",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        WARNING_PREFIX => "Warning",
        ASSUMPTION_NOTE => {
            "Note: results are indicative pre-design estimates. BPE values use the {curve} curve as basis."
        }
        BALANCE_HEADING => "\n== Mass & Energy Balance ==",
        EFFECTS_HEADING => "\n== Effect-wise Summary ==",
        FEED_FLOW => "Feed Flow (m³/h)",
        FEED_DM => "Feed DM (%)",
        FEED_TSS => "Feed TSS (%)",
        FEED_TDS => "Feed TDS (%)",
        PRODUCT_FLOW => "Product Flow (m³/h)",
        PRODUCT_DM => "Product DM (%)",
        WATER_EVAPORATED => "Water Evaporated (kg/h)",
        STEAM_NEEDED => "Steam Needed (kg/h)",
        STEAM_POWER => "Steam Power (kW)",
        STEAM_ECONOMY => "Steam Economy",
        STEAM_TEMP => "Steam Temp (°C)",
        TOTAL_THERMAL => "Total Thermal Load (kW)",
        CONDENSER_LOAD => "Final Stage Condenser Load (kW)",
        COL_EFFECT => "Effect",
        COL_PRESSURE => "Abs Pressure (kPa)",
        COL_BOILING => "Boiling Pt (°C)",
        COL_BPE => "BPE (°C)",
        COL_DRIVING_DT => "LMTD (°C)",
        COL_VAPOR_KG => "Vapour (kg/h)",
        COL_VAPOR_M3 => "Vapour (m³/h)",
        COL_CONCENTRATE_KG => "Concentrate (kg/h)",
        COL_CONCENTRATE_M3 => "Concentrate (m³/h)",
        INTERACTIVE_HEADING => "\n-- Evaporator design input (enter = default) --",
        PROMPT_EFFECTS => "Number of effects",
        PROMPT_FEED_FLOW => "Feed flow [m³/h]",
        PROMPT_FEED_DM => "Feed dry matter [%]",
        PROMPT_FEED_TSS => "Feed TSS [%]",
        PROMPT_FEED_TEMP => "Feed temperature [°C]",
        PROMPT_PRODUCT_DM => "Product dry matter [%]",
        PROMPT_STEAM_PRESSURE => "Steam pressure",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_EFFECTS_RANGE => "Number of effects must be between 0 and {max}.",
        SAT_HEADING => "\n-- Saturation model check (design model vs IAPWS-IF97) --",
        SAT_TEMPERATURE => "Saturation temperature (°C)",
        SAT_PRESSURE => "Absolute pressure (kPa)",
        SAT_DESIGN_PRESSURE => "Design model pressure (Antoine, kPa)",
        SAT_DESIGN_TEMPERATURE => "Design model temperature (table, °C)",
        SAT_REFERENCE => "IF97 reference",
        SAT_DEVIATION => "Deviation",
        SAT_LATENT_HEAT => "IF97 latent heat (kJ/kg)",
        _ => return None,
    })
}
