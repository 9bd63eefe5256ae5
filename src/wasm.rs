//! JavaScript bindings.
//!
//! Thin adapters over the Rust API: inputs are deserialized from JS values
//! (any accepted QUBO encoding, camelCase options), results are returned as
//! plain objects with the trace decimated to every 10th sample. Options not
//! supplied by the caller come from [`SpikeConfig::compact`].

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::maxcut::{encode_max_cut, evaluate_cut, solve_max_cut, Graph};
use crate::qubo::QuboInput;
use crate::spike::{SpikeConfig, SpikeOptions, SpikeResult, SpikeRunner};
use crate::trace::TracePoint;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    #[serde(flatten)]
    result: SpikeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Vec<TracePoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cut_value: Option<f64>,
}

impl Report {
    fn new(mut result: SpikeResult, cut_value: Option<f64>) -> Self {
        let trace = result.decimated_trace();
        result.trace = None;
        Self {
            result,
            trace,
            cut_value,
        }
    }
}

fn parse_options(options: JsValue) -> Result<SpikeConfig, JsError> {
    let overrides = if options.is_undefined() || options.is_null() {
        SpikeOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    Ok(overrides.apply(SpikeConfig::compact()))
}

/// Solves a QUBO given as `[[i, j, q], ...]`, `{ Q: [...] }` or
/// `{ n, terms: [...] }`.
#[wasm_bindgen(js_name = solveQubo)]
pub fn solve_qubo(problem: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let input = QuboInput::deserialize_from(serde_wasm_bindgen::Deserializer::from(problem))?;
    let qubo = input.canonicalize()?;
    let config = parse_options(options)?;
    let result = SpikeRunner::run(&qubo, &config)?;
    Ok(serde_wasm_bindgen::to_value(&Report::new(result, None))?)
}

/// Solves Max-Cut on `{ n, edges: [[i, j, w], ...] }`.
#[wasm_bindgen(js_name = solveMaxCut)]
pub fn solve_max_cut_js(graph: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let graph: Graph = serde_wasm_bindgen::from_value(graph)?;
    let config = parse_options(options)?;
    let solved = solve_max_cut(&graph, &config)?;
    let report = Report::new(solved.solution, Some(solved.cut_value));
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Returns the `{ n, terms }` QUBO for a Max-Cut graph.
#[wasm_bindgen(js_name = encodeMaxCutToQubo)]
pub fn encode_max_cut_js(graph: JsValue) -> Result<JsValue, JsError> {
    let graph: Graph = serde_wasm_bindgen::from_value(graph)?;
    let qubo = encode_max_cut(&graph)?;
    Ok(serde_wasm_bindgen::to_value(&qubo)?)
}

/// Cut weight of a 0/1 partition.
#[wasm_bindgen(js_name = evaluateMaxCut)]
pub fn evaluate_max_cut_js(graph: JsValue, state: JsValue) -> Result<f64, JsError> {
    let graph: Graph = serde_wasm_bindgen::from_value(graph)?;
    graph.validate()?;
    let state: Vec<u8> = serde_wasm_bindgen::from_value(state)?;
    if state.len() != graph.n {
        return Err(JsError::new("state length must equal graph.n"));
    }
    Ok(evaluate_cut(&graph, &state))
}
