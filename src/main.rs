use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use imp::build_info;
use imp::core::actions::Action;
use imp::core::core_game::DemonGame;
use imp::event_log::{describe_action_event, describe_tick_event, EventLog};
use imp::rng::DrawRng;
use imp::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("imp {} ({})", build_info::BUILD_DATE, build_info::BUILD_COMMIT);
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Imp - Terminal-Based Virtual Demon Pet\n");
                println!("Usage: imp\n");
                println!("Keys in game:");
                println!("  1-5        Feed / Play / Scold / Medicine / Clean");
                println!("  r          Rebirth (after death)");
                println!("  q          Quit");
                println!("\nOptions:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'imp --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut rng = rand::thread_rng();
    let mut game = DemonGame::new(&mut rng);
    let mut log = EventLog::new();
    log.push(format!(
        "{} hatched! Take good care of it.",
        game.demon().name
    ));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut game, &mut log, &mut rng);

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut DemonGame,
    log: &mut EventLog,
    rng: &mut impl DrawRng,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw_ui(frame, game.demon(), log))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) => key,
            _ => continue,
        };

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char(c @ '1'..='5') if !game.is_dead() => {
                let action = match c {
                    '1' => Action::Feed,
                    '2' => Action::Play,
                    '3' => Action::Discipline,
                    '4' => Action::Medicine,
                    _ => Action::Clean,
                };
                perform_action(game, action, log, rng);
            }
            KeyCode::Char('r') if game.is_dead() => {
                let old_name = game.demon().name.clone();
                game.reset(rng);
                log.push(format!("{} was reborn as {}", old_name, game.demon().name));
            }
            _ => {}
        }
    }
}

/// Applies one action, runs the follow-up tick, and logs what happened.
fn perform_action(game: &mut DemonGame, action: Action, log: &mut EventLog, rng: &mut impl DrawRng) {
    let name = game.demon().name.clone();

    if let Some(event) = game.take_action(action, rng) {
        log.push(describe_action_event(&name, event));
    }

    let result = game.tick(rng);
    for event in &result.events {
        log.push(describe_tick_event(&name, *event));
    }
}
