//! Native AAlib backend using its in-memory driver.

use super::{Driver, EngineContext};
use crate::settings::{Dithering, Font, HardwareSettings, Options, RenderSettings};
use std::ffi::{CStr, c_char, c_double, c_float, c_int, c_void};
use std::ptr::{self, NonNull};

#[repr(C)]
#[allow(dead_code)]
struct AaFont {
    data: *const u8,
    height: c_int,
    name: *const c_char,
    shortname: *const c_char,
}

#[repr(C)]
struct AaDriver {
    _private: [u8; 0],
}

#[repr(C)]
struct AaContext {
    _private: [u8; 0],
}

#[repr(C)]
struct AaHardwareParams {
    font: *const AaFont,
    supported: c_int,
    minwidth: c_int,
    minheight: c_int,
    maxwidth: c_int,
    maxheight: c_int,
    recwidth: c_int,
    recheight: c_int,
    mmwidth: c_int,
    mmheight: c_int,
    width: c_int,
    height: c_int,
    dimmul: c_double,
    boldmul: c_double,
}

#[repr(C)]
struct AaRenderParams {
    bright: c_int,
    contrast: c_int,
    gamma: c_float,
    dither: c_int,
    inversion: c_int,
    randomval: c_int,
}

#[link(name = "aa")]
unsafe extern "C" {
    static mem_d: AaDriver;
    static aa_fonts: [*const AaFont; 0];
    static aa_defparams: AaHardwareParams;
    static aa_defrenderparams: AaRenderParams;

    fn aa_init(
        driver: *const AaDriver,
        defparams: *const AaHardwareParams,
        driverdata: *const c_void,
    ) -> *mut AaContext;
    fn aa_close(c: *mut AaContext);
    fn aa_image(c: *mut AaContext) -> *mut u8;
    fn aa_text(c: *mut AaContext) -> *mut u8;
    fn aa_attrs(c: *mut AaContext) -> *mut u8;
    fn aa_imgwidth(c: *mut AaContext) -> c_int;
    fn aa_imgheight(c: *mut AaContext) -> c_int;
    fn aa_scrwidth(c: *mut AaContext) -> c_int;
    fn aa_scrheight(c: *mut AaContext) -> c_int;
    fn aa_render(
        c: *mut AaContext,
        p: *const AaRenderParams,
        x1: c_int,
        y1: c_int,
        x2: c_int,
        y2: c_int,
    );
}

/// Walks the null-terminated `aa_fonts` table for a matching name or short name.
fn find_font(font: &Font) -> Option<*const AaFont> {
    unsafe {
        let mut entry = ptr::addr_of!(aa_fonts) as *const *const AaFont;
        while !(*entry).is_null() {
            let candidate = *entry;
            for name in [(*candidate).name, (*candidate).shortname] {
                if !name.is_null() && CStr::from_ptr(name).to_bytes() == font.name().as_bytes() {
                    return Some(candidate);
                }
            }
            entry = entry.add(1);
        }
    }
    None
}

/// Hardware and render defaults compiled into the linked AAlib.
///
/// Usable as the `defaults` argument of [`crate::negotiate`] and
/// [`crate::RenderContext::open`] in place of the crate's constants. Option
/// bits this crate does not know are dropped.
pub fn library_defaults() -> (HardwareSettings, RenderSettings) {
    let hw = unsafe { &*ptr::addr_of!(aa_defparams) };
    let rp = unsafe { &*ptr::addr_of!(aa_defrenderparams) };

    let font = if hw.font.is_null() {
        None
    } else {
        let name = unsafe { (*hw.font).name };
        (!name.is_null()).then(|| Font::new(unsafe { CStr::from_ptr(name) }.to_string_lossy()))
    };

    let hardware = HardwareSettings {
        font,
        options: Options::from_bits_truncate(hw.supported as u32),
        min_width: hw.minwidth,
        min_height: hw.minheight,
        max_width: hw.maxwidth,
        max_height: hw.maxheight,
        recommended_width: hw.recwidth,
        recommended_height: hw.recheight,
        physical_width: hw.mmwidth,
        physical_height: hw.mmheight,
        width: hw.width,
        height: hw.height,
        dim_value: hw.dimmul,
        bold_value: hw.boldmul,
    };

    let render = RenderSettings {
        brightness: rp.bright,
        contrast: rp.contrast,
        gamma: rp.gamma,
        dithering_mode: Dithering::try_from(rp.dither).unwrap_or_default(),
        inversion: rp.inversion != 0,
        random: rp.randomval,
    };

    (hardware, render)
}

fn to_int(v: usize) -> c_int {
    c_int::try_from(v).unwrap_or(c_int::MAX)
}

fn to_usize(v: c_int) -> usize {
    usize::try_from(v).unwrap_or(0)
}

/// AAlib's `mem_d` driver: renders into memory, never touches a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryDriver;

impl Driver for MemoryDriver {
    type Context = LibAaContext;

    fn init(&self, settings: &HardwareSettings) -> Option<LibAaContext> {
        let font = match &settings.font {
            Some(font) => match find_font(font) {
                Some(ptr) => ptr,
                None => {
                    log::warn!("AAlib has no font named {:?}", font.name());
                    return None;
                }
            },
            None => ptr::null(),
        };

        let params = AaHardwareParams {
            font,
            supported: settings.options.bits() as c_int,
            minwidth: settings.min_width,
            minheight: settings.min_height,
            maxwidth: settings.max_width,
            maxheight: settings.max_height,
            recwidth: settings.recommended_width,
            recheight: settings.recommended_height,
            mmwidth: settings.physical_width,
            mmheight: settings.physical_height,
            width: settings.width,
            height: settings.height,
            dimmul: settings.dim_value,
            boldmul: settings.bold_value,
        };

        let raw = unsafe { aa_init(ptr::addr_of!(mem_d), &params, ptr::null()) };
        NonNull::new(raw).map(|context| LibAaContext { context })
    }
}

/// Live AAlib context; released on drop.
#[derive(Debug)]
pub struct LibAaContext {
    context: NonNull<AaContext>,
}

impl LibAaContext {
    fn raw(&self) -> *mut AaContext {
        self.context.as_ptr()
    }

    fn text_len(&self) -> usize {
        self.render_width() * self.render_height()
    }
}

impl EngineContext for LibAaContext {
    fn render_width(&self) -> usize {
        to_usize(unsafe { aa_scrwidth(self.raw()) })
    }

    fn render_height(&self) -> usize {
        to_usize(unsafe { aa_scrheight(self.raw()) })
    }

    fn virtual_width(&self) -> usize {
        to_usize(unsafe { aa_imgwidth(self.raw()) })
    }

    fn virtual_height(&self) -> usize {
        to_usize(unsafe { aa_imgheight(self.raw()) })
    }

    fn framebuffer(&mut self) -> Option<&mut [u8]> {
        let len = self.virtual_width() * self.virtual_height();
        let image = unsafe { aa_image(self.raw()) };
        if image.is_null() {
            return None;
        }
        Some(unsafe { std::slice::from_raw_parts_mut(image, len) })
    }

    fn render(&mut self, settings: &RenderSettings, x0: usize, y0: usize, x1: usize, y1: usize) {
        let params = AaRenderParams {
            bright: settings.brightness,
            contrast: settings.contrast,
            gamma: settings.gamma,
            dither: settings.dithering_mode as c_int,
            inversion: c_int::from(settings.inversion),
            randomval: settings.random,
        };
        unsafe {
            aa_render(
                self.raw(),
                &params,
                to_int(x0),
                to_int(y0),
                to_int(x1),
                to_int(y1),
            );
        }
    }

    fn text(&self) -> Option<&[u8]> {
        let text = unsafe { aa_text(self.raw()) };
        if text.is_null() {
            return None;
        }
        Some(unsafe { std::slice::from_raw_parts(text, self.text_len()) })
    }

    fn attrs(&self) -> Option<&[u8]> {
        let attrs = unsafe { aa_attrs(self.raw()) };
        if attrs.is_null() {
            return None;
        }
        Some(unsafe { std::slice::from_raw_parts(attrs, self.text_len()) })
    }

    fn close(self) {
        drop(self);
    }
}

impl Drop for LibAaContext {
    fn drop(&mut self) {
        unsafe { aa_close(self.raw()) };
    }
}
