//! examples/accept_dialog.rs
//!
//! Runs an accept dialog against an in-memory framebuffer with a scripted
//! touch sequence, then dumps a coarse ASCII view of the result.

use gui::{
    Accept, AcceptDialog, Canvas, Color, FramebufferInfo, PixelFormat, Point, Screen, Style, Tick,
    DARK_THEME,
};

const WIDTH: usize = 160;
const HEIGHT: usize = 96;

fn main() {
    let mut buffer = vec![0u8; WIDTH * HEIGHT * 4];
    let info = FramebufferInfo::new(buffer.as_mut_ptr(), WIDTH, HEIGHT, WIDTH * 4, PixelFormat::Bgra);
    // SAFETY: `buffer` outlives `screen` and is not touched while it is alive
    let mut screen = unsafe { Screen::new(info, DARK_THEME.background) };
    screen.clear();

    let style = Style::from_theme(&DARK_THEME);
    let probe = AcceptDialog::new(AcceptDialog::layout(screen.bounds()), "", "", "", &style);
    let yes = probe.yes_area();
    let target = Point::new(yes.x + yes.width / 2, yes.y + yes.height / 2);

    // Half a second of nothing, then a tap on "yes"
    let mut frame = 0u32;
    let mut ticks = || {
        frame += 1;
        match frame {
            1..=30 => Tick::idle(16),
            31 => Tick::pressed(16, target),
            _ => Tick::idle(16),
        }
    };

    let outcome = AcceptDialog::exec("Save changes?", "Yes", "No", &style, &mut screen, &mut ticks);
    screen.present();
    drop(screen);

    println!("dialog returned {:?} after {} ticks", outcome, frame);
    assert_eq!(outcome, Accept::Yes);

    let surface = DARK_THEME.surface;
    for y in (0..HEIGHT).step_by(6) {
        let row: String = (0..WIDTH)
            .step_by(3)
            .map(|x| {
                let at = (y * WIDTH + x) * 4;
                let px = Color::new(buffer[at + 2], buffer[at + 1], buffer[at], buffer[at + 3]);
                if px == DARK_THEME.background {
                    ' '
                } else if px == surface {
                    '.'
                } else {
                    '#'
                }
            })
            .collect();
        println!("{}", row);
    }
}
