#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use batalha_naval::{board_view, Board, BOARD_SIZE, FLEET, NUM_SHIPS, SHIP_LENGTH};

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    batalha_naval::init_logging();

    println!("=== INICIALIZANDO JOGO DE BATALHA NAVAL ===");

    let mut board = Board::new();
    println!("Tabuleiro inicializado com sucesso!");

    // Attempt each ship strictly in fleet order: later ships may collide
    // with the occupancy left by earlier ones.
    println!("\nPosicionando navios no tabuleiro:");
    for (i, ship) in FLEET.iter().enumerate() {
        let (row, col) = ship.origin();
        print!(
            "Navio {} ({}) na posição ({}, {}): ",
            i + 1,
            ship.orientation().label(),
            row,
            col
        );
        match board.place(ship) {
            Ok(()) => println!("SUCESSO!"),
            Err(e) => {
                log::debug!("navio {} rejeitado: {}", i + 1, e);
                println!("ERRO - Posição inválida ou ocupada!");
            }
        }
    }

    println!("\nResumo do posicionamento:");
    println!(
        "- Navios posicionados com sucesso: {}/{}",
        board.placed(),
        NUM_SHIPS
    );
    println!("- Tamanho de cada navio: {} posições", SHIP_LENGTH);
    println!("- Tamanho do tabuleiro: {0}x{0}", BOARD_SIZE);
    log::debug!("tabuleiro final: {:?}", board.grid());

    print!("{}", board_view(board.grid()));

    Ok(())
}
