//! BlockQuest engine as a WASM module for the game client.
//!
//! Every entry point takes and returns JSON strings, except the `*_value`
//! variants which exchange plain JS objects.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { get_level, run_program } from 'blockquest-wasm';
//!
//! await init();
//!
//! const level = get_level(1);
//! const blocks = JSON.stringify([
//!   { id: "block_1", type: "move_right" },
//!   { id: "block_2", type: "move_right" },
//! ]);
//! const result = JSON.parse(run_program(level, blocks));
//! // { steps: [...], reached_goal: true, perfect: true, ... }
//! ```
//!
//! Failures come back as `{"error": "..."}` instead of throwing.

use blockquest_eval::{run_with_limits, ExecutionResult, RunLimits};
use blockquest_game::star_rating;
use blockquest_levels::{level, sandbox_grid};
use blockquest_parser::structure;
use blockquest_types::{Block, Level};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Run a block program on a level with the default budgets.
///
/// `level_json` is a serialized `Level`, `blocks_json` an array of
/// `{ id, type, param? }` blocks. Returns a serialized `ExecutionResult`.
#[wasm_bindgen]
pub fn run_program(level_json: &str, blocks_json: &str) -> String {
    run_program_with_limits(level_json, blocks_json, "{}")
}

/// Like [`run_program`], with budgets such as `{"max_steps": 100}`.
/// Missing fields keep their defaults.
#[wasm_bindgen]
pub fn run_program_with_limits(level_json: &str, blocks_json: &str, limits_json: &str) -> String {
    let parsed = serde_json::from_str::<Level>(level_json).and_then(|level| {
        let blocks: Vec<Block> = serde_json::from_str(blocks_json)?;
        let limits: RunLimits = serde_json::from_str(limits_json)?;
        Ok((level, blocks, limits))
    });
    match parsed {
        Ok((level, blocks, limits)) => to_json(&run_with_limits(&blocks, &level, limits)),
        Err(e) => error_json(&e),
    }
}

/// Match control-flow markers in a flat block array and return the
/// resulting tree.
#[wasm_bindgen]
pub fn structure_blocks(blocks_json: &str) -> String {
    match serde_json::from_str::<Vec<Block>>(blocks_json) {
        Ok(blocks) => to_json(&structure(&blocks)),
        Err(e) => error_json(&e),
    }
}

/// A built-in level by id, serialized.
#[wasm_bindgen]
pub fn get_level(id: u32) -> String {
    match level(id) {
        Ok(level) => to_json(&level),
        Err(e) => error_json(&e),
    }
}

/// An empty sandbox grid of the given interior size, serialized.
#[wasm_bindgen]
pub fn new_sandbox(rows: usize, cols: usize) -> String {
    to_json(&sandbox_grid(rows, cols))
}

/// Star rating (0 to 3) of a serialized `ExecutionResult`. Unreadable
/// input rates 0.
#[wasm_bindgen]
pub fn rate_result(result_json: &str) -> u8 {
    serde_json::from_str::<ExecutionResult>(result_json)
        .map(|result| star_rating(&result))
        .unwrap_or(0)
}

/// Return the engine version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// [`run_program`] over JS objects.
#[wasm_bindgen]
pub fn run_program_value(level: JsValue, blocks: JsValue) -> Result<JsValue, JsValue> {
    let level: Level = serde_wasm_bindgen::from_value(level)?;
    let blocks: Vec<Block> = serde_wasm_bindgen::from_value(blocks)?;
    let result = run_with_limits(&blocks, &level, RunLimits::default());
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// [`structure_blocks`] over JS objects.
#[wasm_bindgen]
pub fn structure_blocks_value(blocks: JsValue) -> Result<JsValue, JsValue> {
    let blocks: Vec<Block> = serde_wasm_bindgen::from_value(blocks)?;
    Ok(serde_wasm_bindgen::to_value(&structure(&blocks))?)
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| error_json(&e))
}

fn error_json(error: &dyn std::fmt::Display) -> String {
    serde_json::json!({ "error": error.to_string() }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const RIGHT_TWICE: &str = r#"[
        {"id": "block_1", "type": "move_right"},
        {"id": "block_2", "type": "move_right"}
    ]"#;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_run_first_level() {
        let result = parse(&run_program(&get_level(1), RIGHT_TWICE));
        assert_eq!(result["reached_goal"], true);
        assert_eq!(result["perfect"], true);
        assert_eq!(result["total_steps"], 2);
        assert_eq!(result["steps"].as_array().unwrap().len(), 3);
        assert_eq!(result["steps"][0]["action"], "start");
        assert_eq!(result["error"], Value::Null);
    }

    #[test]
    fn test_run_with_step_budget() {
        let result = parse(&run_program_with_limits(
            &get_level(1),
            RIGHT_TWICE,
            r#"{"max_steps": 0}"#,
        ));
        assert_eq!(result["error"], "Too many steps! Simplify your code.");
        assert_eq!(result["total_steps"], 1);
    }

    #[test]
    fn test_bad_input_reports_error() {
        let result = parse(&run_program("{", RIGHT_TWICE));
        assert!(result["error"].is_string());
        let result = parse(&run_program(&get_level(1), "[1, 2]"));
        assert!(result["error"].is_string());
    }

    #[test]
    fn test_structure_blocks() {
        let tree = parse(&structure_blocks(
            r#"[
                {"id": "r", "type": "repeat", "param": 3},
                {"id": "m", "type": "move_up"},
                {"id": "e", "type": "end_repeat"}
            ]"#,
        ));
        assert_eq!(tree[0]["type"], "repeat");
        assert_eq!(tree[0]["param"], 3);
        assert_eq!(tree[0]["children"][0]["id"], "m");
        assert_eq!(tree.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_get_level() {
        let level = parse(&get_level(76));
        assert_eq!(level["title"], "Tall Trees");
        assert_eq!(level["world_id"], 4);
        assert_eq!(parse(&get_level(40))["title"], "Dolphin Jump");
        assert_eq!(parse(&get_level(400))["error"], "level 400 not found");
    }

    #[test]
    fn test_new_sandbox() {
        let grid = parse(&new_sandbox(5, 5));
        assert_eq!(grid.as_array().unwrap().len(), 7);
        assert_eq!(grid[1][1], "start");
        assert_eq!(grid[5][5], "goal");
    }

    #[test]
    fn test_rate_result() {
        let result = run_program(&get_level(1), RIGHT_TWICE);
        assert_eq!(rate_result(&result), 3);
        assert_eq!(rate_result("nope"), 0);
    }

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
