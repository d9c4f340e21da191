use std::process::Command;

#[test]
fn placement_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run placement binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.starts_with("=== INICIALIZANDO JOGO DE BATALHA NAVAL ==="));
    assert!(stdout.contains("Tabuleiro inicializado com sucesso!"));
    assert_eq!(stdout.matches("SUCESSO!").count(), 4);
    assert!(!stdout.contains("ERRO"));
    assert!(stdout.contains("Navio 1 (Horizontal) na posição (2, 1): SUCESSO!"));
    assert!(stdout.contains("Navio 4 (Diagonal Ascendente) na posição (7, 8): SUCESSO!"));
    assert!(stdout.contains("- Navios posicionados com sucesso: 4/4"));
    assert!(stdout.contains("- Tamanho de cada navio: 3 posições"));
    assert!(stdout.contains("- Tamanho do tabuleiro: 10x10"));
    assert!(stdout.contains("Legenda: ~ = Água, X = Navio"));
    // Count ship glyphs in the board rows only; the legend line carries a
    // literal " X " of its own.
    let rows = stdout.split("\nLegenda").next().unwrap();
    assert_eq!(rows.matches(" X ").count(), 12);
}

#[test]
fn debug_logging_stays_off_stdout() {
    let output = Command::new("cargo")
        .args(["run", "--quiet"])
        .env("BATALHA_NAVAL_LOG", "debug")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run placement binary");
    assert!(output.status.success());

    // Diagnostics go to stderr; the stdout report is byte-identical to a
    // run at the default level.
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.starts_with("=== INICIALIZANDO JOGO DE BATALHA NAVAL ==="));
    assert!(!stdout.contains("DEBUG"));

    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("DEBUG - tabuleiro final"));
}
