use mathstats_rs::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::error::Error;
use std::fs;
use std::path::Path;

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    #[serde(flatten)]
    case: Case,
    #[serde(skip_deserializing)]
    result: Option<ResultData>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Case {
    Outliers {
        input: Vec<Json>,
        params: OutlierParams,
        expected: Groups,
    },
    EffectSize {
        sample1: Vec<f64>,
        sample2: Vec<f64>,
        expected: EffectSizes,
    },
}

#[derive(Debug, Deserialize, Serialize)]
struct OutlierParams {
    method: String,
    threshold: Option<f64>,
    range: Option<f64>,
    strip_zero: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
struct Groups {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extremes: Option<Vec<f64>>,
    outliers: Vec<f64>,
    inliers: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct EffectSizes {
    pooled_sd: f64,
    pooled_sd_weighted: f64,
    d_cohen: f64,
    d_cohen_pooled: f64,
    g_hedge: f64,
    g_durlak: f64,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ResultData {
    Outliers(Groups),
    EffectSize(EffectSizes),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = Path::new("../reference");
    let output_dir = Path::new("../output/mathstats_rs");

    if !input_dir.exists() {
        eprintln!("Input directory {:?} does not exist.", input_dir);
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    let mut failures = 0;
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            let Some(file_name) = path.file_name() else {
                continue;
            };
            let passed = process_file(&path, &output_dir.join(file_name))?;
            println!(
                "{} {:?}",
                if passed { "PASS" } else { "FAIL" },
                file_name
            );
            if !passed {
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} validation case(s) failed", failures).into());
    }
    Ok(())
}

fn process_file(input_path: &Path, output_path: &Path) -> Result<bool, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let (result, passed) = match &data.case {
        Case::Outliers {
            input,
            params,
            expected,
        } => {
            let groups = run_outliers(input, params)?;
            let passed = groups_match(&groups, expected);
            (ResultData::Outliers(groups), passed)
        }
        Case::EffectSize {
            sample1,
            sample2,
            expected,
        } => {
            let sizes = run_effect_sizes(sample1, sample2);
            let passed = effect_sizes_match(&sizes, expected);
            (ResultData::EffectSize(sizes), passed)
        }
    };

    data.result = Some(result);

    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(passed)
}

fn to_value(json: &Json) -> Result<Value, Box<dyn Error>> {
    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::from(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::from(i),
            None => Value::from(n.as_f64().ok_or("unrepresentable number")?),
        },
        Json::String(s) if s == "nan" => Value::from(f64::NAN),
        Json::String(s) => Value::from(s.as_str()),
        other => return Err(format!("unsupported input element {}", other).into()),
    })
}

fn run_outliers(input: &[Json], params: &OutlierParams) -> Result<Groups, Box<dyn Error>> {
    let row = input.iter().map(to_value).collect::<Result<Vec<_>, _>>()?;

    let mut builder = Outliers::new().method(params.method.parse()?);
    if let Some(threshold) = params.threshold {
        builder = builder.threshold(threshold);
    }
    if let Some(range) = params.range {
        builder = builder.range(range);
    }
    if let Some(strip_zero) = params.strip_zero {
        builder = builder.strip_zero(strip_zero);
    }

    let result = builder.build()?.detect(&row)?;
    Ok(Groups {
        extremes: result.extremes().map(<[f64]>::to_vec),
        outliers: result.outliers().to_vec(),
        inliers: result.inliers().to_vec(),
    })
}

fn run_effect_sizes(sample1: &[f64], sample2: &[f64]) -> EffectSizes {
    let n = (sample1.len() + sample2.len()) as f64;
    let g = g_hedge(sample1, sample2);
    EffectSizes {
        pooled_sd: pooled_sd(sample1, sample2, false),
        pooled_sd_weighted: pooled_sd(sample1, sample2, true),
        d_cohen: d_cohen(sample1, sample2, Sample::First, Tail::One, false),
        d_cohen_pooled: d_cohen(sample1, sample2, Sample::First, Tail::One, true),
        g_hedge: g,
        g_durlak: g_durlak_bias(g, n),
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * b.abs().max(1.0)
}

fn all_close(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| close(x, y))
}

fn groups_match(got: &Groups, expected: &Groups) -> bool {
    let extremes = match (&got.extremes, &expected.extremes) {
        (None, None) => true,
        (Some(a), Some(b)) => all_close(a, b),
        _ => false,
    };
    extremes && all_close(&got.outliers, &expected.outliers) && all_close(&got.inliers, &expected.inliers)
}

fn effect_sizes_match(got: &EffectSizes, expected: &EffectSizes) -> bool {
    close(got.pooled_sd, expected.pooled_sd)
        && close(got.pooled_sd_weighted, expected.pooled_sd_weighted)
        && close(got.d_cohen, expected.d_cohen)
        && close(got.d_cohen_pooled, expected.d_cohen_pooled)
        && close(got.g_hedge, expected.g_hedge)
        && close(got.g_durlak, expected.g_durlak)
}
