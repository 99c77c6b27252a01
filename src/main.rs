mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use crate::core::actions::{find_action, hint_line};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use models::PendingOperation;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use ui::{
    column_geometries, BottomBar, BottomBarContent, BrowserFrame, ColumnView, LayoutMode,
    PreviewPane, TopBar, WarningScreen, MIN_HEIGHT, MIN_WIDTH,
};
use utils::error::Result;
use utils::formatter::{format_date, format_mode};

fn main() -> ExitCode {
    let start_path = match env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => match env::current_dir() {
            Ok(dir) => dir,
            Err(err) => {
                eprintln!("cols: cannot determine working directory: {}", err);
                return ExitCode::FAILURE;
            }
        },
    };

    // 화면 모드 진입 전 치명적 조건 검사: 일반 텍스트로 보고
    match crossterm::terminal::size() {
        Ok((width, height)) if width < MIN_WIDTH || height < MIN_HEIGHT => {
            eprintln!(
                "cols: terminal too small ({}x{}), need at least {}x{}",
                width, height, MIN_WIDTH, MIN_HEIGHT
            );
            return ExitCode::FAILURE;
        }
        Ok(_) => {}
        Err(err) => {
            eprintln!("cols: cannot query terminal size: {}", err);
            return ExitCode::FAILURE;
        }
    }

    let mut app = match App::new(start_path) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("cols: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run_tui(&mut app) {
        eprintln!("cols: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// 터미널 설정 → 이벤트 루프 → 터미널 복원
///
/// 루프가 에러로 끝나도 복원은 항상 수행합니다.
fn run_tui(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    // 실행 중 크기가 줄면 경고 화면으로 대체
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(&app.theme);
                    f.render_widget(warning, size);
                }
                LayoutMode::Browser => {
                    render_browser(f, app);
                }
            }
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match &app.pending {
                    PendingOperation::TextInput { .. } => {
                        app.handle_text_input_key(key.modifiers, key.code);
                    }
                    PendingOperation::Confirm { .. } => {
                        app.handle_confirm_key(key.code);
                    }
                    PendingOperation::Ack { .. } => {
                        app.handle_ack_key();
                    }
                    PendingOperation::None => {
                        if let Some(action) = find_action(key.modifiers, key.code) {
                            app.execute_action(action);
                        }
                    }
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 브라우저 모드 전체 렌더링
fn render_browser(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas().clone();
    let theme = &app.theme;

    render_top_bar(f, app, areas.top_bar);
    render_columns(f, app, areas.content);

    // 미리보기는 지원되는 선택이 있을 때만
    let preview_area = app.layout.preview_area();
    let lines = app.preview_lines(preview_area.height as usize);
    if !lines.is_empty() {
        let preview = PreviewPane::new().lines(&lines).theme(theme);
        f.render_widget(preview, preview_area);
    }

    render_bottom_bar(f, app, areas.bottom_bar);
}

/// 상단 바: user@host + 활성 경로 + 선택 이름
fn render_top_bar(f: &mut ratatui::Frame<'_>, app: &App, area: Rect) {
    let active = app.stack.active();
    let path = active.path.to_string_lossy();
    let selected = active.selected_name.as_deref().unwrap_or("");

    let top_bar = TopBar::new()
        .identity(&app.user, &app.host)
        .path(&path)
        .selected(selected)
        .theme(&app.theme);
    f.render_widget(top_bar, area);
}

/// 테두리/구분선 + 컬럼 엔트리 목록 렌더링
fn render_columns(f: &mut ratatui::Frame<'_>, app: &App, area: Rect) {
    let geometries = column_geometries(&app.stack);

    // 각 컬럼 오른쪽에 세로 구분선 하나씩 (테두리와 겹치면 스킵됨)
    let separators: Vec<u16> = geometries
        .iter()
        .map(|g| area.x + g.x + g.width)
        .collect();

    let frame = BrowserFrame::new().separators(separators).theme(&app.theme);
    f.render_widget(frame, area);

    if area.height < 3 {
        return;
    }
    let inner_height = area.height - 2;

    for (index, geometry) in geometries.iter().enumerate() {
        if !geometry.draws_entries {
            continue;
        }

        let snapshot = &app.stack.columns()[index];
        let column_area = Rect {
            x: area.x + geometry.x,
            y: area.y + 1,
            width: geometry.width.min(area.width.saturating_sub(geometry.x + 1)),
            height: inner_height,
        };
        if column_area.width == 0 {
            continue;
        }

        let view = ColumnView::new()
            .entries(&snapshot.entries)
            .selected_index(snapshot.selected_index)
            .active(index == app.stack.active_index())
            .theme(&app.theme);
        f.render_widget(view, column_area);
    }
}

/// 하단 바: 모달 상태에 따라 프롬프트/상태/일반 정보 중 하나
fn render_bottom_bar(f: &mut ratatui::Frame<'_>, app: &App, area: Rect) {
    let content = match &app.pending {
        PendingOperation::TextInput { kind, value, .. } => BottomBarContent::Prompt {
            text: format!("{}{}", kind.prompt(), value),
        },
        PendingOperation::Confirm { kind } => BottomBarContent::Prompt {
            text: kind.prompt(),
        },
        PendingOperation::Ack { message } => BottomBarContent::Status {
            message: message.clone(),
        },
        PendingOperation::None => match &app.move_source {
            Some(source) => BottomBarContent::MovePending {
                source: source.display().to_string(),
            },
            None => match app.selected_stat() {
                Some(stat) => BottomBarContent::Normal {
                    mode_line: format_mode(stat.kind, stat.mode),
                    date: format_date(stat.modified),
                },
                None => BottomBarContent::Normal {
                    mode_line: String::new(),
                    date: String::new(),
                },
            },
        },
    };

    let hints = hint_line();
    let bottom_bar = BottomBar::new()
        .content(content)
        .hint(&hints)
        .theme(&app.theme);
    f.render_widget(bottom_bar, area);
}
