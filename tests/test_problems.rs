use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::{
    prelude::{predicate, PredicateBooleanExt},
    BoxPredicate,
};

const INSTANCE: &str = r#"arg(a).
arg(b).
arg(c).
arg(d).
att(a,b).
att(b,a).
att(a,c).
att(b,c).
att(c,d).
att(d,c).
"#;

const SELF_ATTACK_INSTANCE: &str = r#"arg(a).
att(a,a).
"#;

fn test_answer_for_problem(
    problem: &str,
    possible_answers: &[&'static str],
    additional_arg: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem_and_instance(INSTANCE, problem, possible_answers, additional_arg)
}

fn test_answer_for_problem_and_instance(
    instance: &str,
    problem: &str,
    possible_answers: &[&'static str],
    additional_arg: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("argolab")?;
    cmd.arg("-f").arg(file.path()).arg("-p").arg(problem);
    if let Some(a) = additional_arg {
        cmd.arg("-a").arg(a);
    }
    let mut pred: BoxPredicate<str> = BoxPredicate::new(predicate::never());
    for a in possible_answers {
        pred = BoxPredicate::new(pred.or(predicate::eq(*a)));
    }
    cmd.assert().success().stdout(pred);
    file.close().unwrap();
    Ok(())
}

#[test]
fn test_complete_se() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem(
        "SE-CO",
        &["[]\n", "[a,d]\n", "[b,d]\n", "[d]\n"],
        None,
    )
}

#[test]
fn test_complete_dc() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem("DC-CO", &["YES\n"], Some("a"))?;
    test_answer_for_problem("DC-CO", &["NO\n"], Some("c"))
}

#[test]
fn test_complete_ds() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem("DS-CO", &["NO\n"], Some("a"))
}

#[test]
fn test_grounded_se() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem("SE-GR", &["[]\n"], None)
}

#[test]
fn test_grounded_ee() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem("EE-GR", &["[[]]\n"], None)
}

#[test]
fn test_preferred_ee() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem(
        "EE-PR",
        &["[[a,d],[b,d]]\n", "[[b,d],[a,d]]\n"],
        None,
    )
}

#[test]
fn test_preferred_ds() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem("DS-PR", &["YES\n"], Some("d"))?;
    test_answer_for_problem("DS-PR", &["NO\n"], Some("a"))
}

#[test]
fn test_stable_se() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem("SE-ST", &["[a,d]\n", "[b,d]\n"], None)
}

#[test]
fn test_stable_dc() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem("DC-ST", &["YES\n"], Some("a"))
}

#[test]
fn test_stable_ds() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem("DS-ST", &["YES\n"], Some("d"))?;
    test_answer_for_problem("DS-ST", &["NO\n"], Some("a"))
}

#[test]
fn test_semi_stable_ee() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem(
        "EE-SST",
        &["[[a,d],[b,d]]\n", "[[b,d],[a,d]]\n"],
        None,
    )
}

#[test]
fn test_stable_se_without_extension() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem_and_instance(SELF_ATTACK_INSTANCE, "SE-ST", &["NO\n"], None)
}

#[test]
fn test_stable_ee_without_extension() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem_and_instance(SELF_ATTACK_INSTANCE, "EE-ST", &["[]\n"], None)
}

#[test]
fn test_stable_ds_without_extension_is_vacuous() -> Result<(), Box<dyn std::error::Error>> {
    test_answer_for_problem_and_instance(SELF_ATTACK_INSTANCE, "DS-ST", &["YES\n"], Some("a"))
}

#[test]
fn test_custom_encoding() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str(INSTANCE)?;
    let mut cmd = Command::cargo_bin("argolab")?;
    cmd.arg("-f")
        .arg(file.path())
        .arg("-p")
        .arg("EE-PR")
        .arg("--encoding")
        .arg("111111");
    cmd.assert().success().stdout(
        predicate::eq("[[a,d],[b,d]]\n").or(predicate::eq("[[b,d],[a,d]]\n")),
    );
    file.close().unwrap();
    Ok(())
}

#[test]
fn test_unknown_problem() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str(INSTANCE)?;
    let mut cmd = Command::cargo_bin("argolab")?;
    cmd.arg("-f").arg(file.path()).arg("-p").arg("SE-XX");
    cmd.assert().failure();
    file.close().unwrap();
    Ok(())
}

#[test]
fn test_acceptance_problem_without_argument() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str(INSTANCE)?;
    let mut cmd = Command::cargo_bin("argolab")?;
    cmd.arg("-f").arg(file.path()).arg("-p").arg("DC-CO");
    cmd.assert().failure();
    file.close().unwrap();
    Ok(())
}

#[test]
fn test_syntax_error_in_instance() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str("argument(a).\n")?;
    let mut cmd = Command::cargo_bin("argolab")?;
    cmd.arg("-f").arg(file.path()).arg("-p").arg("SE-CO");
    cmd.assert().failure();
    file.close().unwrap();
    Ok(())
}
