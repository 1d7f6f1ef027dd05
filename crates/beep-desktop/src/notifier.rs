#[cfg(windows)]
pub use message_beep::MessageBeepNotifier as SystemNotifier;
#[cfg(not(windows))]
pub use terminal_bell::TerminalBell as SystemNotifier;

#[cfg(windows)]
mod message_beep {
    use beep_core::notifier::{NotifierTrait, NotifyReply};
    use lazy_static::lazy_static;
    use windows::Win32::Foundation::{SetLastError, WIN32_ERROR};
    use windows::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryW};
    use windows::core::{Error, s, w};

    type MessageBeepFn = unsafe extern "system" fn(u32) -> i32;

    lazy_static! {
        // user32.dll stays loaded for the life of the process.
        static ref MESSAGE_BEEP: Result<MessageBeepFn, String> = load_message_beep();
    }

    fn load_message_beep() -> Result<MessageBeepFn, String> {
        let user32 = unsafe { LoadLibraryW(w!("user32.dll")) }
            .map_err(|e| format!("failed to load user32.dll: {}", e.message()))?;

        let proc = unsafe { GetProcAddress(user32, s!("MessageBeep")) }.ok_or_else(|| {
            format!(
                "MessageBeep not found in user32.dll: {}",
                Error::from_win32().message()
            )
        })?;

        log::debug!("resolved MessageBeep from user32.dll");
        // SAFETY: MessageBeep is `BOOL WINAPI MessageBeep(UINT uType)`.
        Ok(unsafe {
            std::mem::transmute::<unsafe extern "system" fn() -> isize, MessageBeepFn>(proc)
        })
    }

    /// Plays sounds through `MessageBeep` from user32.dll.
    pub struct MessageBeepNotifier;

    impl MessageBeepNotifier {
        pub fn new() -> Self {
            lazy_static::initialize(&MESSAGE_BEEP);
            if let Err(reason) = MESSAGE_BEEP.as_ref() {
                log::error!("{}", reason);
            }
            Self
        }
    }

    impl NotifierTrait for MessageBeepNotifier {
        fn notify(&self, code: u32) -> NotifyReply {
            let message_beep = match MESSAGE_BEEP.as_ref() {
                Ok(f) => *f,
                Err(reason) => return NotifyReply::failed(reason.clone()),
            };

            let ret = unsafe {
                SetLastError(WIN32_ERROR(0));
                message_beep(code)
            };

            // Always attach the last-error text, successful calls say so too.
            NotifyReply {
                ret: ret as usize,
                diagnostic: Some(Error::from_win32().message().to_string()),
            }
        }
    }

}

#[cfg(not(windows))]
mod terminal_bell {
    use std::io::{self, Write};

    use beep_core::notifier::{NotifierTrait, NotifyReply};

    /// Rings the terminal bell. Stands in for `MessageBeep` where user32.dll
    /// does not exist, every sound kind rings the same bell.
    pub struct TerminalBell;

    impl TerminalBell {
        pub fn new() -> Self {
            log::warn!("no system notification sounds here, ringing the terminal bell instead");
            Self
        }
    }

    impl NotifierTrait for TerminalBell {
        fn notify(&self, code: u32) -> NotifyReply {
            log::trace!("bell for {:#x}", code);
            ring(&mut io::stdout())
        }
    }

    fn ring<W: Write + ?Sized>(out: &mut W) -> NotifyReply {
        match out.write_all(b"\x07").and_then(|()| out.flush()) {
            Ok(()) => NotifyReply::ok(),
            Err(e) => NotifyReply::failed(e.to_string()),
        }
    }

}
