use std::fs;

use convo::{
    ConvoError, Interpreter, Outcome,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            builtins::core::{Arity, BuiltinDef},
            core::EvalResult,
        },
        value::core::Value,
    },
    run_source,
};
use walkdir::WalkDir;

fn run_output(source: &str) -> Vec<String> {
    let mut interpreter = Interpreter::new();
    match run_source(source, &mut interpreter) {
        Ok(_) => interpreter.output().to_vec(),
        Err(e) => panic!("Script failed:\n{source}\nError: {e}"),
    }
}

fn run_err(source: &str) -> ConvoError {
    let mut interpreter = Interpreter::new();
    match run_source(source, &mut interpreter) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{source}"),
        Err(e) => e,
    }
}

fn runtime_kind(source: &str) -> &'static str {
    match run_err(source) {
        ConvoError::Runtime(e) => e.kind(),
        ConvoError::Parse(e) => panic!("expected a runtime error, got: {e}"),
    }
}

#[test]
fn hello_world() {
    assert_eq!(run_output("Say \"Hello, World!\""), ["Hello, World!"]);
}

#[test]
fn arithmetic_and_concatenation() {
    let source = "Let n be 3\nLet m be 4\nSay \"sum=\" + (n + m)";
    assert_eq!(run_output(source), ["sum=7"]);
}

#[test]
fn while_counter() {
    let source = "Let c be 1\n\
                  While c less than 4 do:\n    \
                      Say c\n    \
                      Let c be c + 1\n";
    assert_eq!(run_output(source), ["1", "2", "3"]);
}

#[test]
fn function_and_recursion() {
    let source = "Define fact with n:\n\
                  \x20   If n less than 2 then:\n\
                  \x20       Return 1\n\
                  \x20   Return n * fact(n - 1)\n\
                  Say fact(5)\n";
    assert_eq!(run_output(source), ["120"]);
}

#[test]
fn try_catch_division_by_zero() {
    let source = "Try:\n\
                  \x20   Let x be 10 / 0\n\
                  Catch e:\n\
                  \x20   Say \"caught: \" + e\n";
    assert_eq!(run_output(source), ["caught: division by zero"]);
}

#[test]
fn for_each_over_list() {
    let source = "Let xs be [10, 20, 30]\n\
                  Let total be 0\n\
                  For each v in xs do:\n\
                  \x20   Let total be total + v\n\
                  Say total\n";
    assert_eq!(run_output(source), ["60"]);
}

#[test]
fn evaluation_is_deterministic() {
    let source = "Define fact with n:\n\
                  \x20   If n less than 2 then:\n\
                  \x20       Return 1\n\
                  \x20   Return n * fact(n - 1)\n\
                  Say fact(8)\n\
                  Say \"done\"\n";
    assert_eq!(run_output(source), run_output(source));
}

#[test]
fn function_locals_stay_local() {
    let source = "Define f with x:\n\
                  \x20   Let y be x + 1\n\
                  \x20   Return y\n\
                  Say f(3)\n";
    assert_eq!(run_output(source), ["4"]);

    let leaking = "Define f with x:\n\
                   \x20   Let y be x + 1\n\
                   \x20   Return y\n\
                   Say f(3)\n\
                   Say y\n";
    assert_eq!(runtime_kind(leaking), "NameError");
}

#[test]
fn closures_see_outer_bindings_at_call_time() {
    let source = "Define make_adder with n:\n\
                  \x20   Define add with x:\n\
                  \x20       Return n + x\n\
                  \x20   Return add\n\
                  Let add2 be make_adder(2)\n\
                  Say add2(40)\n";
    assert_eq!(run_output(source), ["42"]);
}

#[test]
fn closures_share_mutable_state() {
    let source = "Define make_counter with start:\n\
                  \x20   Let count be start\n\
                  \x20   Define bump:\n\
                  \x20       Let count be count + 1\n\
                  \x20       Return count\n\
                  \x20   Return bump\n\
                  Let bump be make_counter(10)\n\
                  Say bump()\n\
                  Say bump()\n";
    assert_eq!(run_output(source), ["11", "12"]);
}

#[test]
fn return_escapes_loops_not_just_one_level() {
    let source = "Define find with xs, target:\n\
                  \x20   Let i be 0\n\
                  \x20   While i less than length(xs) do:\n\
                  \x20       If xs[i] equals target then:\n\
                  \x20           Return i\n\
                  \x20       Let i be i + 1\n\
                  \x20   Return -1\n\
                  Let xs be [5, 7, 9]\n\
                  Say find(xs, 7)\n\
                  Say find(xs, 4)\n";
    assert_eq!(run_output(source), ["1", "-1"]);
}

#[test]
fn throw_reaches_the_nearest_catch_through_nesting() {
    let source = "Define risky:\n\
                  \x20   While true do:\n\
                  \x20       If true then:\n\
                  \x20           Throw \"boom\"\n\
                  Try:\n\
                  \x20   Call risky\n\
                  Catch e:\n\
                  \x20   Say \"caught \" + e\n";
    assert_eq!(run_output(source), ["caught boom"]);
}

#[test]
fn truthiness_only_null_and_false_are_falsy() {
    let source = "If 0 then:\n\
                  \x20   Say \"zero is truthy\"\n\
                  If \"\" then:\n\
                  \x20   Say \"empty is truthy\"\n\
                  If null then:\n\
                  \x20   Say \"no\"\n\
                  Else:\n\
                  \x20   Say \"null is falsy\"\n\
                  While false do:\n\
                  \x20   Say \"never\"\n\
                  Say not null\n\
                  Say 1 and 2\n\
                  Say null or 5\n";
    assert_eq!(run_output(source),
               ["zero is truthy", "empty is truthy", "null is falsy", "true", "2", "5"]);
}

#[test]
fn short_circuit_skips_the_right_side() {
    let source = "Define loud:\n\
                  \x20   Say \"evaluated\"\n\
                  \x20   Return true\n\
                  false and loud()\n\
                  true or loud()\n\
                  Say \"end\"\n";
    assert_eq!(run_output(source), ["end"]);
}

#[test]
fn division_always_produces_a_real() {
    assert_eq!(run_output("Say 7 / 2"), ["3.5"]);
    assert_eq!(run_output("Say 10 / 2"), ["5"]);
    assert_eq!(run_output("Say 2 * 3.5"), ["7"]);
}

#[test]
fn plus_concatenates_when_either_side_is_text() {
    assert_eq!(run_output("Say 1 + \"x\""), ["1x"]);
    assert_eq!(run_output("Say \"v\" + 1.5"), ["v1.5"]);
    assert_eq!(run_output("Say \"a\" + null"), ["anull"]);
}

#[test]
fn comparisons() {
    assert_eq!(run_output("Say \"apple\" less than \"banana\""), ["true"]);
    assert_eq!(run_output("Say 5 equals 5.0"), ["true"]);
    assert_eq!(run_output("Say 5 not equals 6"), ["true"]);
    assert_eq!(run_output("Say 3 greater equal 3"), ["true"]);
    assert_eq!(run_output("Say 2 greater than 3"), ["false"]);
    assert_eq!(runtime_kind("Say 1 less than \"a\""), "TypeError");
}

#[test]
fn comparison_chains_are_rejected() {
    assert!(matches!(run_err("Say 1 less than 2 less than 3"), ConvoError::Parse(_)));
}

#[test]
fn lists() {
    let source = "Let xs be [1, 2, 3]\n\
                  Say xs[0]\n\
                  Say xs[-1]\n\
                  append(xs, 4)\n\
                  Say length(xs)\n\
                  Say contains(xs, 4)\n\
                  remove(xs, 1)\n\
                  Say xs\n\
                  Say get(xs, 10, \"missing\")\n";
    assert_eq!(run_output(source),
               ["1", "3", "4", "true", "[2, 3, 4]", "missing"]);
    assert_eq!(runtime_kind("Let xs be [1]\nSay xs[5]"), "IndexError");
}

#[test]
fn dicts_preserve_insertion_order() {
    let source = "Let d be {\"name\": \"Ada\", \"age\": 36}\n\
                  Say d[\"name\"]\n\
                  Say keys(d)\n\
                  Say values(d)\n\
                  For each k in d do:\n\
                  \x20   Say k\n\
                  Say d\n";
    assert_eq!(run_output(source),
               ["Ada", "[name, age]", "[Ada, 36]", "name", "age", "{name: Ada, age: 36}"]);
    assert_eq!(runtime_kind("Let d be {}\nSay d[\"x\"]"), "IndexError");
}

#[test]
fn for_each_over_text_and_dict_keys() {
    assert_eq!(run_output("For each ch in \"abc\" do:\n    Say ch"), ["a", "b", "c"]);
}

#[test]
fn mutating_the_list_during_iteration_does_not_extend_it() {
    let source = "Let xs be [1, 2]\n\
                  Let seen be 0\n\
                  For each v in xs do:\n\
                  \x20   Let seen be seen + 1\n\
                  \x20   append(xs, v)\n\
                  Say seen\n\
                  Say length(xs)\n";
    assert_eq!(run_output(source), ["2", "4"]);
}

#[test]
fn instances_carry_fields_and_methods() {
    let source = "Define Counter with start:\n\
                  \x20   Let this.count be start\n\
                  \x20   Define increment:\n\
                  \x20       Let this.count be this.count + 1\n\
                  Let c be New Counter with 5\n\
                  Call c.increment\n\
                  Call c.increment\n\
                  Say c.count\n\
                  Say c\n";
    assert_eq!(run_output(source), ["7", "<instance of Counter>"]);
}

#[test]
fn each_instance_gets_its_own_fields() {
    let source = "Define Point with x, y:\n\
                  \x20   Let this.x be x\n\
                  \x20   Let this.y be y\n\
                  Let a be New Point with 1, 2\n\
                  Let b be New Point with 3, 4\n\
                  Let a.x be 9\n\
                  Say a.x\n\
                  Say b.x\n";
    assert_eq!(run_output(source), ["9", "3"]);
}

#[test]
fn missing_member_is_a_name_error() {
    let source = "Define Empty:\n\
                  \x20   Let this.here be 1\n\
                  Let e be New Empty\n\
                  Say e.gone\n";
    assert_eq!(runtime_kind(source), "NameError");
}

#[test]
fn wrong_arity_is_an_error() {
    let source = "Define add with a, b:\n\
                  \x20   Return a + b\n\
                  Say add(1)\n";
    assert_eq!(runtime_kind(source), "ArityError");
    assert_eq!(runtime_kind("Say length(1, 2)"), "ArityError");
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert_eq!(runtime_kind("Let x be 5\nSay x(1)"), "TypeError");
}

#[test]
fn stop_terminates_the_program() {
    let mut interpreter = Interpreter::new();
    let outcome = run_source("Say \"one\"\nStop\nSay \"two\"", &mut interpreter).unwrap();
    assert!(matches!(outcome, Outcome::Stopped));
    assert_eq!(interpreter.output(), ["one"]);
}

#[test]
fn stop_is_not_catchable() {
    let mut interpreter = Interpreter::new();
    let source = "Try:\n\
                  \x20   Stop\n\
                  Catch e:\n\
                  \x20   Say \"caught\"\n";
    let outcome = run_source(source, &mut interpreter).unwrap();
    assert!(matches!(outcome, Outcome::Stopped));
    assert!(interpreter.output().is_empty());
}

#[test]
fn uncaught_throw_carries_the_value() {
    match run_err("Throw \"bang\"") {
        ConvoError::Runtime(RuntimeError::Thrown { value, .. }) => {
            assert_eq!(value.to_string(), "bang");
        },
        other => panic!("expected an uncaught throw, got: {other}"),
    }
}

#[test]
fn thrown_values_can_be_any_type() {
    let source = "Try:\n\
                  \x20   Throw {\"code\": 404}\n\
                  Catch e:\n\
                  \x20   Say e[\"code\"]\n";
    assert_eq!(run_output(source), ["404"]);
}

#[test]
fn runtime_errors_render_with_kind_and_line() {
    let error = run_err("Say 1 / 0");
    assert_eq!(error.to_string(), "RuntimeError: division by zero (line 1)");

    let error = run_err("Let a be 1\nSay missing");
    assert_eq!(error.to_string(), "NameError: undefined variable 'missing' (line 2)");
}

#[test]
fn syntax_errors_carry_a_line_number() {
    let source = "Say 1\nLet x be\n";
    match run_err(source) {
        ConvoError::Parse(e) => assert!(e.line() <= 2, "line {} out of range", e.line()),
        ConvoError::Runtime(e) => panic!("expected a syntax error, got: {e}"),
    }
}

#[test]
fn return_outside_a_function_is_a_syntax_error() {
    assert!(matches!(run_err("Return 1"), ConvoError::Parse(_)));
    assert!(matches!(run_err("If true then:\n    Return 1"), ConvoError::Parse(_)));
}

#[test]
fn inconsistent_indentation_is_rejected() {
    let source = "If true then:\n\
                  \x20   Say 1\n\
                  \x20 Say 2\n";
    assert!(matches!(run_err(source), ConvoError::Parse(_)));
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(run_output("say \"hi\""), ["hi"]);
    assert_eq!(run_output("LET x BE 2\nSAY x"), ["2"]);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let source = "# a comment\n\
                  Let x be 1\n\
                  \n\
                  If x equals 1 then:\n\
                  \x20   # only a comment inside the block\n\
                  \x20   Say \"yes\"  # trailing comment\n";
    assert_eq!(run_output(source), ["yes"]);
}

#[test]
fn else_if_chains() {
    let source = "Define grade with score:\n\
                  \x20   If score greater equal 90 then:\n\
                  \x20       Return \"A\"\n\
                  \x20   Else If score greater equal 80 then:\n\
                  \x20       Return \"B\"\n\
                  \x20   Else:\n\
                  \x20       Return \"C\"\n\
                  Say grade(95)\n\
                  Say grade(85)\n\
                  Say grade(40)\n";
    assert_eq!(run_output(source), ["A", "B", "C"]);
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_eq!(run_output("Let length be 5\nSay length"), ["5"]);

    let source = "Define length with x:\n\
                  \x20   Return 99\n\
                  Say length(\"abc\")\n";
    assert_eq!(run_output(source), ["99"]);
}

#[test]
fn general_builtins() {
    assert_eq!(run_output("Say to_number(\"42\") + 1"), ["43"]);
    assert_eq!(run_output("Say to_text(7) + \"!\""), ["7!"]);
    assert_eq!(run_output("Say range(3)"), ["[0, 1, 2]"]);
    assert_eq!(run_output("Say range(2, 5)"), ["[2, 3, 4]"]);
    assert_eq!(run_output("Say round(3.7)"), ["4"]);
    assert_eq!(run_output("Say floor(3.7)"), ["3"]);
    assert_eq!(run_output("Say ceiling(3.2)"), ["4"]);
    assert_eq!(run_output("Say abs(-5)"), ["5"]);
    assert_eq!(run_output("Say sqrt(9)"), ["3"]);
    assert_eq!(run_output("Say power(2, 10)"), ["1024"]);
    assert_eq!(run_output("Say to_list(\"ab\")"), ["[a, b]"]);
    assert_eq!(runtime_kind("Say to_number(\"nope\")"), "TypeError");
}

#[test]
fn random_builtins_stay_in_range() {
    let source = "Let n be random_int(1, 6)\n\
                  If n greater equal 1 and n less equal 6 then:\n\
                  \x20   Say \"in range\"\n";
    assert_eq!(run_output(source), ["in range"]);
}

#[test]
fn string_builtins() {
    assert_eq!(run_output("Say upper(\"abc\")"), ["ABC"]);
    assert_eq!(run_output("Say lower(\"AbC\")"), ["abc"]);
    assert_eq!(run_output("Say trim(\"  x  \")"), ["x"]);
    assert_eq!(run_output("Say split(\"a,b,c\", \",\")"), ["[a, b, c]"]);
    assert_eq!(run_output("Say join([\"a\", \"b\"], \"-\")"), ["a-b"]);
    assert_eq!(run_output("Say replace(\"aaa\", \"a\", \"b\")"), ["bbb"]);
    assert_eq!(run_output("Say starts_with(\"apple\", \"ap\")"), ["true"]);
    assert_eq!(run_output("Say ends_with(\"apple\", \"le\")"), ["true"]);
    assert_eq!(run_output("Say contains(\"apple\", \"ppl\")"), ["true"]);
}

#[test]
fn file_builtins_round_trip() {
    let path = std::env::temp_dir().join(format!("convo-io-{}.txt", std::process::id()));
    let p = path.display();
    let source = [format!("Let path be \"{p}\""),
                  "write_file(path, \"alpha\")".to_string(),
                  "append_file(path, \" beta\")".to_string(),
                  "Say read_file(path)".to_string(),
                  "Say file_exists(path)".to_string(),
                  "Say file_size(path)".to_string(),
                  "Say read_lines(path)".to_string(),
                  "Say delete_file(path)".to_string(),
                  "Say file_exists(path)".to_string()].join("\n");
    assert_eq!(run_output(&source),
               ["alpha beta", "true", "10", "[alpha beta]", "true", "false"]);
    assert_eq!(runtime_kind("Say read_file(\"/no/such/convo/file\")"), "RuntimeError");
}

#[test]
fn json_builtins() {
    let source = "Let d be parse_json(\"{\\\"a\\\": 1, \\\"b\\\": [true, null]}\")\n\
                  Say d[\"a\"]\n\
                  Say d[\"b\"]\n\
                  Say contains(to_json(d), \"\\\"a\\\": 1\")\n";
    assert_eq!(run_output(source), ["1", "[true, null]", "true"]);
    assert_eq!(runtime_kind("Say parse_json(\"{oops\")"), "RuntimeError");
}

#[test]
fn json_file_round_trip() {
    let path = std::env::temp_dir().join(format!("convo-json-{}.json", std::process::id()));
    let p = path.display();
    let source = [format!("Let path be \"{p}\""),
                  "write_json(path, {\"n\": 3, \"ok\": true})".to_string(),
                  "Let back be read_json(path)".to_string(),
                  "Say back[\"n\"]".to_string(),
                  "Say back[\"ok\"]".to_string(),
                  "delete_file(path)".to_string()].join("\n");
    assert_eq!(run_output(&source), ["3", "true"]);
}

#[test]
fn env_builtins() {
    let name = format!("CONVO_TEST_{}", std::process::id());
    let source = [format!("set_env(\"{name}\", \"on\")"),
                  format!("Say get_env(\"{name}\")"),
                  format!("Say has_env(\"{name}\")"),
                  "Say get_env(\"CONVO_SURELY_UNSET_VAR\")".to_string(),
                  format!("Say contains(list_env(), \"{name}\")")].join("\n");
    assert_eq!(run_output(&source), ["on", "true", "null", "true"]);
}

fn greet(args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::Str(format!("hi {}", args[0])))
}

static GREET: BuiltinDef = BuiltinDef { name:  "greet",
                                        arity: Arity::Exact(1),
                                        func:  greet, };

#[test]
fn import_merges_registered_modules_into_the_globals() {
    let mut interpreter = Interpreter::new();
    interpreter.register_module("greetings",
                                vec![("greet".to_string(), Value::Builtin(&GREET)),
                                     ("mascot".to_string(), Value::Str("ferris".to_string()))]);
    run_source("Import greetings\nSay greet(mascot)", &mut interpreter).unwrap();
    assert_eq!(interpreter.output(), ["hi ferris"]);

    assert_eq!(runtime_kind("Import nothing_here"), "NameError");
}

#[test]
fn expression_statements_report_their_value() {
    let mut interpreter = Interpreter::new();
    match run_source("1 + 2", &mut interpreter).unwrap() {
        Outcome::Finished(Some(value)) => assert_eq!(value.to_string(), "3"),
        other => panic!("expected a value, got {other:?}"),
    }
}

#[test]
fn bindings_persist_across_runs_of_one_interpreter() {
    let mut interpreter = Interpreter::new();
    run_source("Let x be 41", &mut interpreter).unwrap();
    run_source("Say x + 1", &mut interpreter).unwrap();
    assert_eq!(interpreter.output(), ["42"]);
}

#[test]
fn example_script_works() {
    let source = fs::read_to_string("tests/example.convo").expect("missing file");
    let output = run_output(&source);
    assert!(!output.is_empty());
}

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in WalkDir::new("docs").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "md")
                                     })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_convo_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut interpreter = Interpreter::new();
            if let Err(e) = run_source(&code, &mut interpreter) {
                panic!("Convo example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No Convo examples found in docs");
}

fn extract_convo_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        if line.trim_start().starts_with("```convo") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && line.trim_start().starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
