use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::evaporator::{ProcessInput, ProcessReport, MAX_EFFECTS};
use crate::i18n::{keys, Translator};
use crate::steam::SaturationComparison;
use crate::units::{pressure, PressureUnit};

/// 설계 입력 7개 값을 차례로 묻는다. 빈 입력은 `defaults` 값을 그대로 쓴다.
pub fn prompt_process_input<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    defaults: &ProcessInput,
    steam_unit: PressureUnit,
    tr: &Translator,
) -> Result<ProcessInput, AppError> {
    writeln!(writer, "{}", tr.t(keys::INTERACTIVE_HEADING))?;
    let effects = loop {
        let value = read_f64(
            reader,
            writer,
            &tr.t(keys::PROMPT_EFFECTS),
            defaults.effects as f64,
            tr,
        )?;
        if (0.0..=MAX_EFFECTS as f64).contains(&value) {
            // 소수 입력은 내림
            break value as usize;
        }
        let message = tr
            .t(keys::ERROR_EFFECTS_RANGE)
            .replace("{max}", &MAX_EFFECTS.to_string());
        writeln!(writer, "{message}")?;
    };
    let feed_flow = read_f64(
        reader,
        writer,
        &tr.t(keys::PROMPT_FEED_FLOW),
        defaults.feed_flow_m3_per_h,
        tr,
    )?;
    let feed_dm = read_f64(reader, writer, &tr.t(keys::PROMPT_FEED_DM), defaults.feed_dm_pct, tr)?;
    let feed_tss = read_f64(
        reader,
        writer,
        &tr.t(keys::PROMPT_FEED_TSS),
        defaults.feed_tss_pct,
        tr,
    )?;
    let product_dm = read_f64(
        reader,
        writer,
        &tr.t(keys::PROMPT_PRODUCT_DM),
        defaults.product_dm_pct,
        tr,
    )?;
    let feed_temp = read_f64(
        reader,
        writer,
        &tr.t(keys::PROMPT_FEED_TEMP),
        defaults.feed_temp_c,
        tr,
    )?;
    let steam_label = format!("{} [{}]", tr.t(keys::PROMPT_STEAM_PRESSURE), steam_unit.symbol());
    let steam = read_f64(
        reader,
        writer,
        &steam_label,
        pressure::from_bar(defaults.steam_pressure_barg, steam_unit),
        tr,
    )?;

    Ok(ProcessInput {
        effects,
        feed_flow_m3_per_h: feed_flow,
        feed_dm_pct: feed_dm,
        feed_tss_pct: feed_tss,
        feed_temp_c: feed_temp,
        product_dm_pct: product_dm,
        steam_pressure_barg: pressure::to_bar(steam, steam_unit),
    })
}

fn read_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(writer, "{prompt}")?;
    writer.flush()?;
    let mut buf = String::new();
    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        )));
    }
    Ok(buf)
}

fn read_f64<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
    default: f64,
    tr: &Translator,
) -> Result<f64, AppError> {
    let prompt = format!("{label} ({default}): ");
    loop {
        let s = read_line(reader, writer, &prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => writeln!(writer, "{}", tr.t(keys::ERROR_INVALID_NUMBER))?,
        }
    }
}

/// 설계 보고서를 표 형태 문자열로 만든다.
///
/// 오류가 있으면 오류 문자열(그대로)과 경고만 보여주고 표는 생략한다.
pub fn render_report(report: &ProcessReport, tr: &Translator) -> String {
    let mut out = String::new();
    if report.has_error() {
        let _ = writeln!(out, "{}", report.error);
        push_warnings(&mut out, report, tr);
        return out;
    }

    let _ = writeln!(out, "{}", tr.t(keys::BALANCE_HEADING));
    let summary: [(&str, String); 13] = [
        (keys::FEED_FLOW, report.feed_flow_m3_per_h.to_string()),
        (keys::FEED_DM, report.feed_dm_pct.to_string()),
        (keys::FEED_TSS, report.feed_tss_pct.to_string()),
        (keys::FEED_TDS, report.feed_tds_pct.to_string()),
        (keys::PRODUCT_FLOW, report.product_flow_m3_per_h.to_string()),
        (keys::PRODUCT_DM, report.product_dm_pct.to_string()),
        (keys::WATER_EVAPORATED, report.water_evaporated_kg_per_h.to_string()),
        (keys::STEAM_NEEDED, report.steam_needed_kg_per_h.to_string()),
        (keys::STEAM_POWER, report.steam_power_kw.to_string()),
        (keys::STEAM_ECONOMY, report.steam_economy.to_string()),
        (keys::STEAM_TEMP, report.steam_temp_c.to_string()),
        (keys::TOTAL_THERMAL, report.total_thermal_load_kw.to_string()),
        (keys::CONDENSER_LOAD, report.condenser_load_kw.to_string()),
    ];
    let labels: Vec<_> = summary.iter().map(|(key, _)| tr.t(key)).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for (label, (_, value)) in labels.iter().zip(&summary) {
        let pad = label_width - label.chars().count();
        let _ = writeln!(out, "  {label}{:pad$}  {value}", "");
    }

    let _ = writeln!(out, "{}", tr.t(keys::EFFECTS_HEADING));
    let headers: Vec<String> = [
        keys::COL_EFFECT,
        keys::COL_PRESSURE,
        keys::COL_BOILING,
        keys::COL_BPE,
        keys::COL_DRIVING_DT,
        keys::COL_VAPOR_KG,
        keys::COL_VAPOR_M3,
        keys::COL_CONCENTRATE_KG,
        keys::COL_CONCENTRATE_M3,
    ]
    .iter()
    .map(|key| tr.t(key).into_owned())
    .collect();
    let rows: Vec<Vec<String>> = report
        .effects
        .iter()
        .map(|e| {
            vec![
                e.effect.to_string(),
                format!("{:.1}", e.pressure_kpa),
                format!("{:.1}", e.boiling_temp_c),
                format!("{:.2}", e.bpe_c),
                format!("{:.1}", e.driving_delta_t_c),
                e.vapor_kg_per_h.to_string(),
                format!("{:.2}", e.vapor_m3_per_h),
                e.concentrate_kg_per_h.to_string(),
                format!("{:.2}", e.concentrate_m3_per_h),
            ]
        })
        .collect();
    push_table(&mut out, &headers, &rows);

    let _ = writeln!(out);
    push_warnings(&mut out, report, tr);
    let note = tr.t(keys::ASSUMPTION_NOTE).replace("{curve}", &report.bpe_curve);
    let _ = writeln!(out, "{note}");
    out
}

fn push_warnings(out: &mut String, report: &ProcessReport, tr: &Translator) {
    let prefix = tr.t(keys::WARNING_PREFIX);
    for warning in &report.warnings {
        let _ = writeln!(out, "{prefix}: {warning}");
    }
}

fn push_table(out: &mut String, headers: &[String], rows: &[Vec<String>]) {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| {
                let pad = w.saturating_sub(cell.chars().count());
                format!("{:pad$}{cell}", "")
            })
            .collect::<Vec<_>>()
            .join(" | ")
    };
    let _ = writeln!(out, "{}", line(headers));
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in rows {
        let _ = writeln!(out, "{}", line(row.as_slice()));
    }
}

/// 포화 모델 비교 결과를 문자열로 만든다. `by_temperature`면 압력을, 아니면 온도를 비교한다.
pub fn render_comparison(
    comparison: &SaturationComparison,
    by_temperature: bool,
    tr: &Translator,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::SAT_HEADING));
    let design_key = if by_temperature {
        keys::SAT_DESIGN_PRESSURE
    } else {
        keys::SAT_DESIGN_TEMPERATURE
    };
    let _ = writeln!(out, "  {}: {:.2}", tr.t(keys::SAT_TEMPERATURE), comparison.temperature_c);
    let _ = writeln!(out, "  {}: {:.3}", tr.t(keys::SAT_PRESSURE), comparison.pressure_kpa);
    let _ = writeln!(out, "  {}: {:.3}", tr.t(design_key), comparison.design_value);
    let _ = writeln!(out, "  {}: {:.3}", tr.t(keys::SAT_REFERENCE), comparison.reference_value);
    let _ = writeln!(out, "  {}: {:+.3}", tr.t(keys::SAT_DEVIATION), comparison.deviation());
    let _ = writeln!(
        out,
        "  {}: {:.1}",
        tr.t(keys::SAT_LATENT_HEAT),
        comparison.latent_heat_kj_per_kg
    );
    out
}
