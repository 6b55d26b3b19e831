use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const INTRO: &str = "general.intro";
    pub const OUTRO: &str = "general.outro";
    pub const CANCELLED: &str = "general.cancelled";
    pub const DEFAULTS_SAVED: &str = "general.defaults_saved";

    pub const PROMPT_TOTAL_WEEKS: &str = "prompt.total_weeks";
    pub const PROMPT_INITIAL_VOLUME: &str = "prompt.initial_volume";
    pub const PROMPT_INCREMENT: &str = "prompt.increment";
    pub const PROMPT_RECOVERY_INTERVAL: &str = "prompt.recovery_interval";
    pub const PROMPT_RECOVERY_DECREMENT: &str = "prompt.recovery_decrement";
    pub const PROMPT_ROUND: &str = "prompt.round";
    pub const PROMPT_YES_NO_HINT: &str = "prompt.yes_no_hint";

    pub const ERROR_POSITIVE_INTEGER: &str = "error.positive_integer";
    pub const ERROR_NON_NEGATIVE_INTEGER: &str = "error.non_negative_integer";
    pub const ERROR_YES_NO: &str = "error.yes_no";
    pub const ERROR_INVALID_ARGUMENTS: &str = "error.invalid_arguments";

    /// `{week}`, `{volume}` 자리표시자를 포함한다.
    pub const RESULT_WEEK_LINE: &str = "result.week_line";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
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
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if let (Some(dir), None) = (pack_dir, &overrides) {
            tracing::warn!(dir, lang = lang_code, "language pack not found, using built-in strings");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩 → 내장 언어 → 영어 → 키 순서로 찾는다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let built_in: Option<&'a str> = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        built_in.unwrap_or(key)
    }

    /// 주차 한 줄을 포맷한다.
    pub fn week_line(&self, week: u64, volume: &str) -> String {
        self.t(keys::RESULT_WEEK_LINE)
            .replace("{week}", &week.to_string())
            .replace("{volume}", volume)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
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
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. `<dir>/<code>.toml`, 없으면 기본 코드(`en-us` → `en`)를 시도한다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    try_load(lang).or_else(|| {
        lang.split_once(['-', '_'])
            .and_then(|(base, _)| try_load(base))
    })
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error:",
        INTRO => "Welcome to the Running calculator",
        OUTRO => "Here is your plan:",
        CANCELLED => "Operation cancelled",
        DEFAULTS_SAVED => "Saved answers as new defaults.",
        PROMPT_TOTAL_WEEKS => "How many weeks you want to calculate?",
        PROMPT_INITIAL_VOLUME => "How much volume you want to start with?",
        PROMPT_INCREMENT => "How much in percentage you want the volume to increment every week?",
        PROMPT_RECOVERY_INTERVAL => "How many weeks of work between every recover week",
        PROMPT_RECOVERY_DECREMENT => {
            "How much in percentage you want the volume to decrement during the recovery week?"
        }
        PROMPT_ROUND => "Do you want to round the volume to the nearest integer?",
        PROMPT_YES_NO_HINT => "y/n",
        ERROR_POSITIVE_INTEGER => "Value must be a positive integer number",
        ERROR_NON_NEGATIVE_INTEGER => "Value must be a non negative integer number",
        ERROR_YES_NO => "Please answer y or n.",
        ERROR_INVALID_ARGUMENTS => "Invalid command-line values:",
        RESULT_WEEK_LINE => "Week {week}: {volume}",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류:",
        INTRO => "러닝 계산기에 오신 것을 환영합니다",
        OUTRO => "계획은 다음과 같습니다:",
        CANCELLED => "작업이 취소되었습니다",
        DEFAULTS_SAVED => "입력값을 새 기본값으로 저장했습니다.",
        PROMPT_TOTAL_WEEKS => "몇 주를 계산할까요?",
        PROMPT_INITIAL_VOLUME => "시작 볼륨은 얼마인가요?",
        PROMPT_INCREMENT => "매주 볼륨을 몇 퍼센트 늘릴까요?",
        PROMPT_RECOVERY_INTERVAL => "회복 주 사이의 훈련 주 수",
        PROMPT_RECOVERY_DECREMENT => "회복 주에는 볼륨을 몇 퍼센트 줄일까요?",
        PROMPT_ROUND => "볼륨을 가장 가까운 정수로 반올림할까요?",
        PROMPT_YES_NO_HINT => "y/n",
        ERROR_POSITIVE_INTEGER => "양의 정수를 입력하세요",
        ERROR_NON_NEGATIVE_INTEGER => "0 이상의 정수를 입력하세요",
        ERROR_YES_NO => "y 또는 n으로 답하세요.",
        ERROR_INVALID_ARGUMENTS => "잘못된 명령행 값:",
        RESULT_WEEK_LINE => "{week}주차: {volume}",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[general]\nintro = \"Hi\"\n[result]\nweek_line = \"W{week}={volume}\"\n")
            .expect("pack");
        assert_eq!(map.get(keys::INTRO).map(String::as_str), Some("Hi"));
        assert_eq!(map.get(keys::RESULT_WEEK_LINE).map(String::as_str), Some("W{week}={volume}"));
    }

    #[test]
    fn explicit_language_wins_over_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }

    #[test]
    fn korean_week_line() {
        let tr = Translator::new("ko");
        assert_eq!(tr.week_line(3, "26"), "3주차: 26");
    }
}
