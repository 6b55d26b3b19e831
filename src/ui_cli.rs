use std::io::{self, BufRead, Write};

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::PromptDefaults;
use crate::i18n::{keys, Translator};
use crate::plan::WeekResult;
use crate::validation::{self, Field, RawInputs};

/// 입력 중 이 문자열을 받으면 취소로 처리한다.
pub const CANCEL_TOKEN: &str = ":q";

/// 프롬프트 결과. 사용자가 입력을 끝내거나 중단(Ctrl+C)하거나 취소 토큰을 입력하면 `Cancelled`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<T> {
    Answered(T),
    Cancelled,
}

/// 입력원에서 한 줄을 읽은 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// 입력 끝 (Ctrl+D, 닫힌 stdin)
    Eof,
    /// Ctrl+C
    Interrupted,
}

/// 프롬프트를 보여주고 한 줄을 읽는 입력원.
pub trait LineSource {
    /// `out`은 입력원이 직접 프롬프트를 그리지 않을 때 쓰는 출력이다.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Line>;
}

/// 임의의 `BufRead`를 입력원으로 쓴다. 중단 신호는 받지 않는다.
pub struct Lines<R>(pub R);

impl<R: BufRead> LineSource for Lines<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Line> {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut buf = String::new();
        if self.0.read_line(&mut buf)? == 0 {
            return Ok(Line::Eof);
        }
        Ok(Line::Text(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// rustyline 기반 터미널 입력. Ctrl+C를 `Line::Interrupted`로 받는다.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Line> {
        // 이전 출력이 프롬프트보다 먼저 보이도록
        out.flush()?;
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Line::Text(line)),
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(ReadlineError::Io(err)) => Err(err),
            Err(err) => Err(io::Error::new(io::ErrorKind::Other, err.to_string())),
        }
    }
}

/// 입력원과 출력 스트림을 묶은 대화형 콘솔.
pub struct Console<L, W> {
    input: L,
    output: W,
}

impl Console<Terminal, io::Stdout> {
    pub fn terminal() -> Result<Self, ReadlineError> {
        Ok(Self::new(Terminal::new()?, io::stdout()))
    }
}

impl<R: BufRead, W: Write> Console<Lines<R>, W> {
    /// 스크립트된 입력용 콘솔.
    pub fn from_reader(input: R, output: W) -> Self {
        Self::new(Lines(input), output)
    }
}

impl<L: LineSource, W: Write> Console<L, W> {
    pub fn new(input: L, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Prompt<String>> {
        match self.input.read_line(prompt, &mut self.output)? {
            Line::Text(line) if line.trim() == CANCEL_TOKEN => Ok(Prompt::Cancelled),
            Line::Text(line) => Ok(Prompt::Answered(line)),
            Line::Eof | Line::Interrupted => {
                writeln!(self.output)?;
                Ok(Prompt::Cancelled)
            }
        }
    }

    /// 숫자 필드를 입력받는다. 빈 입력은 기본값, 잘못된 입력은 다시 묻는다.
    /// 돌려주는 값은 검증을 통과한 원시 텍스트다.
    pub fn prompt_field(
        &mut self,
        tr: &Translator,
        field: Field,
        default: &str,
    ) -> io::Result<Prompt<String>> {
        let prompt = format!("{} [{default}] ", tr.t(prompt_key(field)));
        loop {
            let line = match self.read_line(&prompt)? {
                Prompt::Answered(line) => line,
                Prompt::Cancelled => return Ok(Prompt::Cancelled),
            };
            let raw = if line.trim().is_empty() {
                default.to_string()
            } else {
                line
            };
            match validation::parse_field(field, &raw) {
                Ok(_) => return Ok(Prompt::Answered(raw)),
                Err(err) => {
                    tracing::debug!(%err, "rejected input");
                    writeln!(self.output, "{}", tr.t(field_message_key(field)))?;
                }
            }
        }
    }

    /// 예/아니오 질문. 빈 입력은 기본값.
    pub fn confirm(&mut self, tr: &Translator, message: &str, default: bool) -> io::Result<Prompt<bool>> {
        let default_hint = if default { "Y" } else { "N" };
        let prompt = format!("{message} ({}) [{default_hint}] ", tr.t(keys::PROMPT_YES_NO_HINT));
        loop {
            let line = match self.read_line(&prompt)? {
                Prompt::Answered(line) => line,
                Prompt::Cancelled => return Ok(Prompt::Cancelled),
            };
            match line.trim().to_lowercase().as_str() {
                "" => return Ok(Prompt::Answered(default)),
                "y" | "yes" => return Ok(Prompt::Answered(true)),
                "n" | "no" => return Ok(Prompt::Answered(false)),
                _ => writeln!(self.output, "{}", tr.t(keys::ERROR_YES_NO))?,
            }
        }
    }

    /// 미리 채워지지 않은 필드만 차례로 묻고 원시 입력을 완성한다.
    pub fn collect_inputs(
        &mut self,
        tr: &Translator,
        defaults: &PromptDefaults,
        prefilled: &Prefilled,
    ) -> io::Result<Prompt<RawInputs>> {
        let mut raw = defaults.as_raw_inputs();
        for field in Field::ALL {
            if let Some(value) = prefilled.get(field) {
                raw.set(field, value.to_string());
                continue;
            }
            match self.prompt_field(tr, field, &defaults.text_for(field))? {
                Prompt::Answered(value) => raw.set(field, value),
                Prompt::Cancelled => return Ok(Prompt::Cancelled),
            }
        }
        raw.round_to_integer = match prefilled.round_to_integer {
            Some(round) => round,
            None => match self.confirm(tr, tr.t(keys::PROMPT_ROUND), defaults.round_to_integer)? {
                Prompt::Answered(round) => round,
                Prompt::Cancelled => return Ok(Prompt::Cancelled),
            },
        };
        Ok(Prompt::Answered(raw))
    }
}

/// 명령행에서 미리 받은 값. 있는 필드는 프롬프트를 건너뛴다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefilled {
    pub total_weeks: Option<String>,
    pub initial_volume: Option<String>,
    pub increment_percent: Option<String>,
    pub recovery_interval: Option<String>,
    pub recovery_decrement_percent: Option<String>,
    pub round_to_integer: Option<bool>,
}

impl Prefilled {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::TotalWeeks => self.total_weeks.as_deref(),
            Field::InitialVolume => self.initial_volume.as_deref(),
            Field::IncrementPercent => self.increment_percent.as_deref(),
            Field::RecoveryInterval => self.recovery_interval.as_deref(),
            Field::RecoveryDecrementPercent => self.recovery_decrement_percent.as_deref(),
        }
    }

    /// 채워진 필드만 검증한다.
    pub fn check(&self) -> Result<(), Vec<validation::ValidationError>> {
        let errors: Vec<_> = Field::ALL
            .into_iter()
            .filter_map(|field| {
                self.get(field)
                    .and_then(|raw| validation::parse_field(field, raw).err())
            })
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn prompt_key(field: Field) -> &'static str {
    match field {
        Field::TotalWeeks => keys::PROMPT_TOTAL_WEEKS,
        Field::InitialVolume => keys::PROMPT_INITIAL_VOLUME,
        Field::IncrementPercent => keys::PROMPT_INCREMENT,
        Field::RecoveryInterval => keys::PROMPT_RECOVERY_INTERVAL,
        Field::RecoveryDecrementPercent => keys::PROMPT_RECOVERY_DECREMENT,
    }
}

/// 필드별 사용자용 오류 문구 키. 주 수는 0을 허용하지만 문구는 양의 정수로 안내한다.
pub fn field_message_key(field: Field) -> &'static str {
    match field {
        Field::RecoveryInterval => keys::ERROR_NON_NEGATIVE_INTEGER,
        Field::TotalWeeks
        | Field::InitialVolume
        | Field::IncrementPercent
        | Field::RecoveryDecrementPercent => keys::ERROR_POSITIVE_INTEGER,
    }
}

/// 볼륨을 JavaScript `Number#toString`과 같은 규칙으로 표기한다.
///
/// 가장 짧은 왕복 표기(`24.2`, `100`)를 쓰되, 10진 지수가 21 이상이거나
/// -7 이하이면 지수 표기(`1e+21`, `7.307508186654674e+43`, `1e-7`)로 바꾼다.
pub fn format_volume(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0도 0으로 표시
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_volume(-value));
    }

    // `{:e}`는 가장 짧은 왕복 자릿수를 준다. 예: 2.42e1
    let sci = format!("{value:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // 소수점 위치: value = 0.d1d2... × 10^n
    let n = exp + 1;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", (n - 1).abs())
        } else {
            format!("{first}.{rest}e{sign}{}", (n - 1).abs())
        }
    }
}

/// 계획을 주당 한 줄로 출력한다. 회복 주는 바로 아래 줄에 강조해서 한 줄 더 쓴다.
///
/// 주 단위로 흘려 쓰므로 매우 긴 계획도 메모리에 모으지 않는다.
pub fn render_plan<W, I>(out: &mut W, tr: &Translator, plan: I, emphasize: bool) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = WeekResult>,
{
    for result in plan {
        writeln!(out, "{}", tr.week_line(result.week, &format_volume(result.volume)))?;
        if let Some(recovery) = result.recovery_volume {
            let line = tr.week_line(result.week, &format_volume(recovery));
            if emphasize {
                writeln!(out, "{}", line.underline())?;
            } else {
                writeln!(out, "{line}")?;
            }
        }
    }
    writeln!(out)?;
    Ok(())
}
